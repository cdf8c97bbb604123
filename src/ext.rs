//! Fluent extension traits over `str` and `Option<str>`-like values.

use std::borrow::Cow;

use crate::whitespace::{self, is_whitespace};

/// Fluent predicates and tidying for string slices.
///
/// Implemented for `str`, so the methods are available on `&str`, `String`,
/// and anything that derefs to `str`.
pub trait StrTidy {
    /// Returns `true` if the value is empty or consists only of whitespace.
    fn is_blank(&self) -> bool;

    /// Returns `true` if the value contains at least one non-whitespace
    /// character. Opposite of [`is_blank`](StrTidy::is_blank).
    fn has_value(&self) -> bool;

    /// Removes leading, trailing, and redundant interior whitespace.
    ///
    /// Method form of [`remove_redundant_whitespace`](crate::remove_redundant_whitespace).
    fn remove_redundant_whitespace(&self) -> Cow<'_, str>;
}

impl StrTidy for str {
    fn is_blank(&self) -> bool {
        self.chars().all(is_whitespace)
    }

    fn has_value(&self) -> bool {
        !self.is_blank()
    }

    fn remove_redundant_whitespace(&self) -> Cow<'_, str> {
        whitespace::remove_redundant_whitespace(self)
    }
}

/// The absent-tolerant surface: the same predicates and tidying, lifted
/// over `Option`. `None` stands in for a missing value and always passes
/// through untouched.
pub trait OptionStrTidy {
    /// Returns `true` if the value is `None` or an empty string.
    fn is_none_or_empty(&self) -> bool;

    /// Returns `true` if the value is `None`, empty, or all-whitespace.
    fn is_none_or_blank(&self) -> bool;

    /// Returns `true` if the value is present and contains a
    /// non-whitespace character.
    fn has_value(&self) -> bool;

    /// Tidies the contained value; `None` maps to `None` with no
    /// allocation.
    fn remove_redundant_whitespace(&self) -> Option<Cow<'_, str>>;
}

impl<T: AsRef<str>> OptionStrTidy for Option<T> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().is_none_or(|v| v.as_ref().is_empty())
    }

    fn is_none_or_blank(&self) -> bool {
        self.as_ref().is_none_or(|v| v.as_ref().is_blank())
    }

    fn has_value(&self) -> bool {
        self.as_ref().is_some_and(|v| v.as_ref().has_value())
    }

    fn remove_redundant_whitespace(&self) -> Option<Cow<'_, str>> {
        self.as_ref()
            .map(|v| whitespace::remove_redundant_whitespace(v.as_ref()))
    }
}
