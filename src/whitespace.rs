//! Redundant-whitespace removal.
//!
//! The normalizer trims leading/trailing whitespace and collapses every
//! interior whitespace run to a single representative, while keeping CRLF
//! pairs intact. Already-tidy input is returned as a borrow of the caller's
//! buffer; the slow path allocates exactly once.

use std::borrow::Cow;

/// The fixed set of code points this crate treats as whitespace.
///
/// This is the Unicode `White_Space` set: ASCII controls TAB..CR, space,
/// NEL, no-break space, the Ogham space mark, the space-separator block,
/// and the line/paragraph separators. The set is closed; classification
/// never depends on locale.
pub(crate) const fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Removes leading, trailing, and redundant interior whitespace.
///
/// Interior whitespace runs collapse to a single representative character.
/// Line breaks win over other whitespace kinds: a run containing `\n`
/// collapses to `\n`, a literal `\r\n` pair is preserved as a unit, and a
/// run of plain spaces or tabs keeps its first character. A lone interior
/// whitespace character is never touched, so `"a\tb"` stays `"a\tb"`.
///
/// Input that is already tidy comes back as [`Cow::Borrowed`] over the
/// (trimmed) input with no allocation; otherwise a single fresh [`String`]
/// is built. The function is total: it has no error cases, and an
/// all-whitespace input collapses to the empty string.
///
/// ```
/// use tidystr::remove_redundant_whitespace;
///
/// assert_eq!(remove_redundant_whitespace("  Here  is\r\n\r\nsome  String "), "Here is\r\nsome String");
/// assert_eq!(remove_redundant_whitespace("already tidy"), "already tidy");
/// ```
pub fn remove_redundant_whitespace(input: &str) -> Cow<'_, str> {
    if input.is_empty() {
        return Cow::Borrowed(input);
    }

    let body = input.trim_matches(is_whitespace);

    match first_redundant_run(body) {
        None => Cow::Borrowed(body),
        Some(prefix_end) => Cow::Owned(collapse_runs(body, prefix_end)),
    }
}

/// Scans `body` for the first redundant whitespace run.
///
/// A run is redundant as soon as two whitespace code points are adjacent,
/// unless those two are exactly the pair `\r\n` (one CRLF unit is the
/// canonical line-break token, not a run). Isolated single whitespace
/// characters are already minimal and never trigger the slow path.
///
/// Returns the byte offset one past the first character of that run, i.e.
/// the length of the already-minimal prefix the collapser may copy
/// verbatim. Single pass, no allocation.
fn first_redundant_run(body: &str) -> Option<usize> {
    let mut prev: Option<char> = None;
    for (idx, ch) in body.char_indices() {
        if let Some(prev_ch) = prev
            && is_whitespace(prev_ch)
            && is_whitespace(ch)
            && !(prev_ch == '\r' && ch == '\n')
        {
            return Some(idx);
        }
        prev = Some(ch);
    }
    None
}

/// Rebuilds `body` with every whitespace run collapsed to one representative.
///
/// `prefix_end` is the byte offset just past the first character of the
/// first redundant run; everything before it is already minimal and is
/// copied verbatim (including that run's first whitespace character). The
/// remainder replays one character at a time with a single
/// `prev_is_whitespace` flag:
///
/// - non-whitespace: appended as-is;
/// - first whitespace of a new run: appended as-is;
/// - inside an ongoing run: `\n` completes a CRLF unit when the last output
///   character is `\r`, otherwise overwrites the run's representative;
///   `\r` overwrites the representative unless an LF is already in place
///   (a CR trailing an established LF is dropped, never reopening a CRLF
///   unit out of order); any other whitespace kind is dropped.
///
/// At least one character of the run at `prefix_end` is known redundant, so
/// the output is pre-sized to `body.len() - 1`.
fn collapse_runs(body: &str, prefix_end: usize) -> String {
    let mut out = String::with_capacity(body.len() - 1);
    out.push_str(&body[..prefix_end]);

    let mut prev_is_whitespace = true;
    for ch in body[prefix_end..].chars() {
        if is_whitespace(ch) {
            if prev_is_whitespace {
                match ch {
                    '\n' => {
                        if out.ends_with('\r') {
                            out.push('\n');
                        } else {
                            overwrite_last(&mut out, '\n');
                        }
                    }
                    '\r' => {
                        if !out.ends_with('\n') {
                            overwrite_last(&mut out, '\r');
                        }
                    }
                    _ => {}
                }
                continue;
            }
            prev_is_whitespace = true;
        } else {
            prev_is_whitespace = false;
        }
        out.push(ch);
    }

    out
}

/// Replaces the last character of `out` with `ch`.
///
/// The collapser only calls this while inside a whitespace run, so `out`
/// is never empty here and its last character is the run's current
/// representative.
fn overwrite_last(out: &mut String, ch: char) {
    out.pop();
    out.push(ch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(remove_redundant_whitespace(""), "");
        assert_eq!(remove_redundant_whitespace(" "), "");
        assert_eq!(remove_redundant_whitespace(" \r"), "");
        assert_eq!(remove_redundant_whitespace(" \r\n "), "");
        assert_eq!(remove_redundant_whitespace(" \t\r\n "), "");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(remove_redundant_whitespace(" \r\n\tString\r\n\t "), "String");
        assert_eq!(remove_redundant_whitespace("a "), "a");
        assert_eq!(remove_redundant_whitespace(" a"), "a");
    }

    #[test]
    fn collapses_plain_runs() {
        assert_eq!(remove_redundant_whitespace("Some  String"), "Some String");
        assert_eq!(
            remove_redundant_whitespace("Here  is  a  String"),
            "Here is a String"
        );
    }

    #[test]
    fn single_interior_whitespace_untouched() {
        assert_eq!(remove_redundant_whitespace("Some String"), "Some String");
        assert_eq!(remove_redundant_whitespace("Some\tString"), "Some\tString");
        assert_eq!(
            remove_redundant_whitespace("Here\r\nis\r\na\r\nString"),
            "Here\r\nis\r\na\r\nString"
        );
    }

    #[test]
    fn newline_wins_over_spaces() {
        assert_eq!(remove_redundant_whitespace("Some\r\n String"), "Some\r\nString");
        assert_eq!(remove_redundant_whitespace("Some \r\n String"), "Some\r\nString");
        assert_eq!(remove_redundant_whitespace("Some \r\nString"), "Some\r\nString");
        assert_eq!(remove_redundant_whitespace("a \n b"), "a\nb");
        assert_eq!(remove_redundant_whitespace("a\n b"), "a\nb");
        assert_eq!(remove_redundant_whitespace("a \nb"), "a\nb");
    }

    #[test]
    fn crlf_units_preserved_and_deduplicated() {
        assert_eq!(remove_redundant_whitespace("Some\r\nString"), "Some\r\nString");
        assert_eq!(
            remove_redundant_whitespace("Some\r\n\r\nString"),
            "Some\r\nString"
        );
        assert_eq!(
            remove_redundant_whitespace("Here  is\r\n\r\nsome  String"),
            "Here is\r\nsome String"
        );
    }

    #[test]
    fn cr_after_established_lf_is_dropped() {
        // The representative stays LF; the trailing CR never reopens a
        // CRLF unit out of order.
        assert_eq!(remove_redundant_whitespace("a\n\rb"), "a\nb");
        assert_eq!(remove_redundant_whitespace("a \n\r b"), "a\nb");
    }

    #[test]
    fn lone_cr_run_collapses_to_cr() {
        assert_eq!(remove_redundant_whitespace("a\r\rb"), "a\rb");
        assert_eq!(remove_redundant_whitespace("a \r b"), "a\rb");
    }

    #[test]
    fn unicode_whitespace_collapses() {
        // No-break space and ideographic space are in the fixed set.
        assert_eq!(remove_redundant_whitespace("a\u{00A0}\u{00A0}b"), "a\u{00A0}b");
        assert_eq!(remove_redundant_whitespace("\u{3000}a\u{3000}"), "a");
        // A newline inside the run still wins.
        assert_eq!(remove_redundant_whitespace("a\u{00A0}\nb"), "a\nb");
    }

    #[test]
    fn fast_path_borrows_original_storage() {
        let input = "Here is a String";
        let out = remove_redundant_whitespace(input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref().as_ptr(), input.as_ptr()));
    }

    #[test]
    fn trimmed_fast_path_borrows_subslice() {
        let input = "  Here is a String  ";
        let out = remove_redundant_whitespace(input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "Here is a String");
    }

    #[test]
    fn slow_path_allocates_once_at_reduced_capacity() {
        let input = "a   b";
        match remove_redundant_whitespace(input) {
            Cow::Owned(s) => {
                assert_eq!(s, "a b");
                assert!(s.capacity() <= input.len());
            }
            Cow::Borrowed(_) => panic!("redundant run must take the owned path"),
        }
    }

    #[test]
    fn idempotent_over_corpus() {
        let corpus = [
            "",
            " ",
            "a",
            "Some  String",
            "Here  is\r\n\r\nsome  String",
            " \r\n\tString\r\n\t ",
            "a\n\rb",
            "a\u{00A0}\u{00A0}\u{2028}b",
            "\u{1680}x\u{2000}\u{2001}y\u{205F}",
        ];
        for input in corpus {
            let once = remove_redundant_whitespace(input).into_owned();
            let twice = remove_redundant_whitespace(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
            // Second pass must be the no-op fast path.
            assert!(matches!(twice, Cow::Borrowed(_)));
        }
    }
}
