//! Split configuration.

use std::borrow::Cow;

use crate::filter::filter_text;

/// One split invocation: the text plus everything that shapes the result.
///
/// A request is a plain value built fresh for each call to [`crate::split`].
/// Nothing persists between invocations, so a caller that owns mutable UI
/// state (current text, current size, filter toggles) rebuilds a request from
/// that state every time rather than mutating a long-lived one.
///
/// ```rust
/// use strips::SplitRequest;
///
/// let request = SplitRequest::new("one two three", 5).strip_whitespace(true);
/// assert_eq!(request.filtered_text(), "onetwothree");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRequest<'a> {
    /// The raw input text.
    pub text: &'a str,
    /// Maximum characters per piece. Must be >= 1.
    pub chunk_size: usize,
    /// Remove every Unicode-whitespace character before splitting.
    pub strip_whitespace: bool,
    /// Remove every `'\n'` before splitting.
    pub strip_newlines: bool,
}

impl<'a> SplitRequest<'a> {
    /// Create a request with no filters active.
    #[must_use]
    pub fn new(text: &'a str, chunk_size: usize) -> Self {
        Self {
            text,
            chunk_size,
            strip_whitespace: false,
            strip_newlines: false,
        }
    }

    /// Enable or disable whitespace removal.
    #[must_use]
    pub fn strip_whitespace(self, strip: bool) -> Self {
        Self {
            strip_whitespace: strip,
            ..self
        }
    }

    /// Enable or disable newline removal.
    #[must_use]
    pub fn strip_newlines(self, strip: bool) -> Self {
        Self {
            strip_newlines: strip,
            ..self
        }
    }

    /// The text this request would split: the input after its filters.
    #[must_use]
    pub fn filtered_text(&self) -> Cow<'a, str> {
        filter_text(self.text, self.strip_whitespace, self.strip_newlines)
    }
}
