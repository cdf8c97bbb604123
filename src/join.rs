//! Joining collections into a single string.

use std::fmt::{self, Write as _};

use crate::ext::StrTidy;

/// Concatenates `items` with `separator` between each pair of elements.
///
/// The separator appears only between elements, so an empty iterator yields
/// an empty string and a single element yields itself.
pub fn join_display<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // Writing into a String is infallible.
        let _ = write!(out, "{item}");
    }
    out
}

/// Fluent joining for any iterable.
pub trait JoinStrings: IntoIterator + Sized {
    /// Joins all elements with `separator`. See [`join_display`].
    fn join_str(self, separator: &str) -> String
    where
        Self::Item: fmt::Display,
    {
        join_display(self, separator)
    }

    /// Joins the elements that have non-whitespace content with
    /// `separator`, skipping blank elements entirely (they contribute no
    /// separator either).
    fn join_non_empty(self, separator: &str) -> String
    where
        Self::Item: AsRef<str>,
    {
        let mut out = String::new();
        let mut first = true;
        for item in self {
            let item = item.as_ref();
            if item.is_blank() {
                continue;
            }
            if !first {
                out.push_str(separator);
            }
            out.push_str(item);
            first = false;
        }
        out
    }
}

impl<I: IntoIterator> JoinStrings for I {}
