//! # tidystr
//!
//! Small, deterministic string-tidying utilities: redundant-whitespace
//! removal, blank-content predicates, argument guards, and collection
//! joining.
//!
//! ## Core Responsibilities
//!
//! - **Whitespace tidying**: [`remove_redundant_whitespace`] trims the
//!   edges of a value and collapses every interior whitespace run to a
//!   single representative character, with line breaks taking precedence
//!   over spaces and tabs and literal `\r\n` pairs preserved as units.
//!   Already-tidy input is returned as a borrow of the caller's buffer
//!   ([`Cow::Borrowed`](std::borrow::Cow)); the slow path allocates exactly
//!   once.
//! - **Predicates**: [`StrTidy::is_blank`] / [`StrTidy::has_value`] report
//!   whether a value has non-whitespace content, with [`OptionStrTidy`]
//!   lifting the same checks over `Option`.
//! - **Guards**: [`ensure_has_value`], [`ensure_some`], and
//!   [`ensure_not_empty`] validate an argument and hand it back unchanged,
//!   reporting a [`GuardError`] that names the offending parameter.
//! - **Joining**: [`JoinStrings::join_str`] concatenates any iterable with
//!   a separator; [`JoinStrings::join_non_empty`] drops blank elements
//!   first.
//!
//! Everything here is a pure function over its input: no I/O, no shared
//! state, no configuration. The same input always produces the same
//! output, and calls are freely concurrent.
//!
//! ## Example Usage
//!
//! ```
//! use tidystr::{JoinStrings, StrTidy};
//!
//! let tidy = "  Here  is\r\n\r\nsome  String ".remove_redundant_whitespace();
//! assert_eq!(tidy, "Here is\r\nsome String");
//!
//! let line = ["alpha", " ", "beta", ""].join_non_empty(", ");
//! assert_eq!(line, "alpha, beta");
//! assert!(line.has_value());
//! ```

mod ext;
mod guard;
mod join;
mod whitespace;

pub use ext::{OptionStrTidy, StrTidy};
pub use guard::{GuardError, ensure_has_value, ensure_not_empty, ensure_some};
pub use join::{JoinStrings, join_display};
pub use whitespace::remove_redundant_whitespace;
