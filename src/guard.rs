//! Argument guards: validate and hand the argument back unchanged.
//!
//! Guards are the only part of the crate that reports failure; the tidying
//! core itself is total. Each guard takes the argument name so the error
//! message can point at the offending parameter.

use thiserror::Error;

use crate::ext::StrTidy;

/// Errors raised by the argument guards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("{name} should not be missing")]
    Missing { name: String },
    #[error("{name} should not be empty or whitespace-only")]
    Blank { name: String },
    #[error("{name} should have at least one item")]
    NoItems { name: String },
}

/// Ensures `value` has non-whitespace content, returning it unchanged.
///
/// # Errors
///
/// Returns [`GuardError::Blank`] when `value` is empty or all-whitespace.
pub fn ensure_has_value<'a>(value: &'a str, name: &str) -> Result<&'a str, GuardError> {
    if value.is_blank() {
        return Err(GuardError::Blank { name: name.into() });
    }
    Ok(value)
}

/// Ensures `value` is present, unwrapping it.
///
/// # Errors
///
/// Returns [`GuardError::Missing`] when `value` is `None`.
pub fn ensure_some<T>(value: Option<T>, name: &str) -> Result<T, GuardError> {
    value.ok_or_else(|| GuardError::Missing { name: name.into() })
}

/// Ensures `items` has at least one element, returning the slice unchanged.
///
/// # Errors
///
/// Returns [`GuardError::NoItems`] when `items` is empty.
pub fn ensure_not_empty<'a, T>(items: &'a [T], name: &str) -> Result<&'a [T], GuardError> {
    if items.is_empty() {
        return Err(GuardError::NoItems { name: name.into() });
    }
    Ok(items)
}
