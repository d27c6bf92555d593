//! Property-based tests for the splitting core.
//!
//! These verify the invariants the library promises:
//! - Lossless: pieces concatenate back to the filtered text
//! - Bounded: every piece but the last is exactly chunk_size characters
//! - Counted: piece count is ceil(chars / chunk_size)
//! - Order-free filters: both filters together equal whitespace removal alone
//! - Deterministic: identical requests give identical pieces

use proptest::prelude::*;
use strips::{filter_text, split, SplitRequest};

// =============================================================================
// Test Generators
// =============================================================================

/// Arbitrary text over the full char range, newlines included.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..300).prop_map(|chars| chars.into_iter().collect())
}

/// Text biased toward whitespace so the filters have something to do.
fn whitespace_heavy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::char::range('a', 'z'),
            1 => Just(' '),
            1 => Just('\n'),
            1 => Just('\t'),
        ],
        0..300,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// Core Invariants
// =============================================================================

proptest! {
    #[test]
    fn pieces_concatenate_to_filtered_text(
        text in arbitrary_text(),
        size in 1usize..80,
        ws in any::<bool>(),
        nl in any::<bool>(),
    ) {
        let request = SplitRequest::new(&text, size)
            .strip_whitespace(ws)
            .strip_newlines(nl);
        let pieces = split(&request).unwrap();

        let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
        prop_assert_eq!(joined, request.filtered_text().into_owned());
    }

    #[test]
    fn pieces_are_bounded(
        text in arbitrary_text(),
        size in 1usize..80,
    ) {
        let pieces = split(&SplitRequest::new(&text, size)).unwrap();

        for piece in pieces.iter().take(pieces.len().saturating_sub(1)) {
            prop_assert_eq!(piece.len(), size, "non-final piece must be exactly full");
        }
        if let Some(last) = pieces.last() {
            prop_assert!(last.len() >= 1 && last.len() <= size);
        }
    }

    #[test]
    fn piece_count_is_ceiling(
        text in whitespace_heavy_text(),
        size in 1usize..80,
        ws in any::<bool>(),
        nl in any::<bool>(),
    ) {
        let request = SplitRequest::new(&text, size)
            .strip_whitespace(ws)
            .strip_newlines(nl);
        let pieces = split(&request).unwrap();

        let chars = request.filtered_text().chars().count();
        prop_assert_eq!(pieces.len(), chars.div_ceil(size));
    }

    #[test]
    fn piece_indices_are_positional(
        text in arbitrary_text(),
        size in 1usize..80,
    ) {
        let pieces = split(&SplitRequest::new(&text, size)).unwrap();
        for (i, piece) in pieces.iter().enumerate() {
            prop_assert_eq!(piece.index, i);
        }
    }

    #[test]
    fn both_filters_equal_whitespace_alone(text in whitespace_heavy_text()) {
        prop_assert_eq!(
            filter_text(&text, true, true),
            filter_text(&text, true, false)
        );
    }

    #[test]
    fn newline_filter_removes_exactly_newlines(text in whitespace_heavy_text()) {
        let filtered = filter_text(&text, false, true);
        prop_assert!(!filtered.contains('\n'));

        // Nothing else is touched.
        let expected: String = text.chars().filter(|&c| c != '\n').collect();
        prop_assert_eq!(filtered.into_owned(), expected);
    }

    #[test]
    fn splitting_is_deterministic(
        text in arbitrary_text(),
        size in 1usize..80,
        ws in any::<bool>(),
        nl in any::<bool>(),
    ) {
        let request = SplitRequest::new(&text, size)
            .strip_whitespace(ws)
            .strip_newlines(nl);
        prop_assert_eq!(split(&request).unwrap(), split(&request).unwrap());
    }

    #[test]
    fn zero_size_always_rejected(text in arbitrary_text()) {
        prop_assert!(split(&SplitRequest::new(&text, 0)).is_err());
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn empty_input_produces_empty_output() {
    let pieces = split(&SplitRequest::new("", 50)).unwrap();
    assert!(pieces.is_empty());
}

#[test]
fn whitespace_only_input_filters_to_nothing() {
    let pieces = split(&SplitRequest::new(" \t\n \r\n ", 50).strip_whitespace(true)).unwrap();
    assert!(pieces.is_empty());
}

#[test]
fn no_piece_is_ever_empty() {
    let texts = ["x", "xy", "xyz", "xyzw"];
    for text in texts {
        for size in 1..=5 {
            let pieces = split(&SplitRequest::new(text, size)).unwrap();
            assert!(pieces.iter().all(|p| !p.is_empty()));
        }
    }
}

#[test]
fn unicode_text_never_splits_a_code_point() {
    let text = "Hello 世界! Привет мир! مرحبا بالعالم";
    let pieces = split(&SplitRequest::new(text, 7)).unwrap();

    // Piece text is valid UTF-8 by construction; verify the character
    // accounting holds too.
    let total: usize = pieces.iter().map(strips::Piece::len).sum();
    assert_eq!(total, text.chars().count());
}
