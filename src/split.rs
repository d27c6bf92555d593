//! The splitting core: filter, then partition.
//!
//! ## How It Works
//!
//! ```text
//! chunk_size = 4
//!
//! Input:    "one two\nthree"   (strip_whitespace = true)
//! Filtered: "onetwothree"
//!
//! Piece 0: "onet"
//! Piece 1: "woth"
//! Piece 2: "ree"    <- final piece may be shorter
//! ```
//!
//! The partition is over characters, not bytes: a piece never ends inside a
//! multibyte code point, and `chunk_size` means "at most N characters", which
//! is what paste-limited inputs actually count.
//!
//! The walk is a single pass over `char_indices`, so arbitrarily large inputs
//! split in O(n) with no recursion.

use crate::{Error, Piece, Result, SplitRequest};

/// Split the request's text into pieces of at most `chunk_size` characters.
///
/// The pieces cover the filtered text exactly once, in order: every piece
/// except possibly the last has exactly `chunk_size` characters, the last has
/// between 1 and `chunk_size`, and empty filtered text yields an empty vector.
///
/// The operation is pure: identical requests always produce identical pieces.
///
/// ## Example
///
/// ```rust
/// use strips::SplitRequest;
///
/// let pieces = strips::split(&SplitRequest::new("abcdefgh", 3)).unwrap();
///
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[0].text, "abc");
/// assert_eq!(pieces[1].text, "def");
/// assert_eq!(pieces[2].text, "gh");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`. No partition is
/// attempted for an invalid size.
pub fn split(request: &SplitRequest<'_>) -> Result<Vec<Piece>> {
    if request.chunk_size == 0 {
        return Err(Error::InvalidChunkSize(0));
    }

    let filtered = request.filtered_text();
    if filtered.is_empty() {
        return Ok(vec![]);
    }

    // Byte length over-estimates the piece count for multibyte text; that
    // only costs a little spare capacity.
    let mut pieces = Vec::with_capacity(filtered.len().div_ceil(request.chunk_size));
    let mut start = 0;
    let mut taken = 0;

    for (pos, ch) in filtered.char_indices() {
        taken += 1;
        if taken == request.chunk_size {
            let end = pos + ch.len_utf8();
            let index = pieces.len();
            pieces.push(Piece::new(&filtered[start..end], index));
            start = end;
            taken = 0;
        }
    }

    // Remainder shorter than chunk_size.
    if start < filtered.len() {
        let index = pieces.len();
        pieces.push(Piece::new(&filtered[start..], index));
    }

    Ok(pieces)
}
