//! The Piece type: one bounded-length run of the filtered text.

/// One piece of the split text, ready to be copied somewhere.
///
/// Pieces are measured in characters (Unicode scalar values), because the
/// limits they are cut for — chat inputs, form fields, terminal paste — count
/// characters, not bytes.
///
/// The `index` field is the piece's zero-based position in the sequence.
/// Concatenating all pieces of a split in index order reproduces the filtered
/// input exactly:
///
/// ```rust
/// use strips::SplitRequest;
///
/// let pieces = strips::split(&SplitRequest::new("abcdefgh", 3)).unwrap();
/// let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
/// assert_eq!(joined, "abcdefgh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The piece text.
    pub text: String,
    /// Zero-based index of this piece in the sequence.
    pub index: usize,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this piece in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this piece is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Piece {{ index: {}, chars: {} }}",
            self.index,
            self.len()
        )
    }
}
