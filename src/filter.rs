//! Character-removal filters applied before splitting.
//!
//! Two filters exist, matching the two things people want stripped before
//! pasting into a length-limited input:
//!
//! - **Whitespace removal**: drops every character in the Unicode whitespace
//!   class (spaces, tabs, newlines, and the more exotic space code points).
//! - **Newline removal**: drops only `'\n'`.
//!
//! Newline is itself whitespace, so enabling both filters yields exactly the
//! same text as whitespace removal alone. The implementation applies both
//! predicates in a single pass, which makes the combination order-free by
//! construction rather than by convention.

use std::borrow::Cow;

/// Remove filtered characters from `text`.
///
/// Returns a borrowed `Cow` when no filter is active, so the common
/// no-filter path allocates nothing.
///
/// ```rust
/// use strips::filter_text;
///
/// assert_eq!(filter_text("a b\nc", true, false), "abc");
/// assert_eq!(filter_text("a b\nc", false, true), "a bc");
/// assert_eq!(filter_text("a b\nc", false, false), "a b\nc");
/// ```
#[must_use]
pub fn filter_text(text: &str, strip_whitespace: bool, strip_newlines: bool) -> Cow<'_, str> {
    if !strip_whitespace && !strip_newlines {
        return Cow::Borrowed(text);
    }

    let keep = |c: char| !(strip_whitespace && c.is_whitespace()) && !(strip_newlines && c == '\n');

    if text.chars().all(keep) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.chars().filter(|&c| keep(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_borrows() {
        let cow = filter_text("hello world", false, false);
        assert!(matches!(cow, Cow::Borrowed(_)));
        assert_eq!(cow, "hello world");
    }

    #[test]
    fn test_whitespace_removal() {
        assert_eq!(filter_text("a b\tc\nd\r\ne", true, false), "abcde");
    }

    #[test]
    fn test_newline_removal_keeps_other_whitespace() {
        assert_eq!(filter_text("a b\nc d\n", false, true), "a bc d");
    }

    #[test]
    fn test_carriage_return_survives_newline_filter() {
        // Only '\n' is a newline for this filter; '\r' is whitespace.
        assert_eq!(filter_text("a\r\nb", false, true), "a\rb");
        assert_eq!(filter_text("a\r\nb", true, false), "ab");
    }

    #[test]
    fn test_both_filters_equal_whitespace_alone() {
        let text = "line one\nline two\t end ";
        assert_eq!(
            filter_text(text, true, true),
            filter_text(text, true, false)
        );
    }

    #[test]
    fn test_unicode_whitespace() {
        // U+00A0 no-break space and U+2003 em space are whitespace.
        assert_eq!(filter_text("a\u{a0}b\u{2003}c", true, false), "abc");
    }

    #[test]
    fn test_clean_text_borrows_even_with_filters() {
        let cow = filter_text("abc", true, true);
        assert!(matches!(cow, Cow::Borrowed(_)));
    }
}
