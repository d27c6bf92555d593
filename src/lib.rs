//! # strips
//!
//! Split text into fixed-size pieces for paste-limited inputs.
//!
//! ## The Problem
//!
//! Plenty of places you paste text into have a hard length cap: chat inputs,
//! SMS gateways, ticket fields, config values, terminal line buffers. A long
//! document has to go in by hand, one bounded piece at a time, and doing the
//! cutting yourself is exactly the kind of fiddly work that loses a character
//! at a boundary.
//!
//! strips does the cutting. Given text, an optional pair of character-removal
//! filters, and a maximum piece length, it produces an ordered sequence of
//! pieces that covers the filtered text exactly once:
//!
//! ```text
//! chunk_size = 50
//!
//! Input (112 chars): "This is a longer test string that should be split..."
//!
//! Piece 0: chars   0..50
//! Piece 1: chars  50..100
//! Piece 2: chars 100..112   <- remainder, shorter than chunk_size
//! ```
//!
//! ## Filters
//!
//! Before partitioning, two independent filters may run:
//!
//! - `strip_whitespace`: remove every Unicode-whitespace character
//! - `strip_newlines`: remove every `'\n'`
//!
//! Newline is whitespace, so enabling both is the same as whitespace removal
//! alone; the filters are a single pass and cannot interact by order.
//!
//! ## Quick Start
//!
//! ```rust
//! use strips::SplitRequest;
//!
//! let text = "some long text\nwith a line break";
//!
//! let request = SplitRequest::new(text, 10).strip_newlines(true);
//! let pieces = strips::split(&request).unwrap();
//!
//! let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
//! assert_eq!(joined, "some long textwith a line break");
//! assert!(pieces.iter().all(|p| p.len() <= 10));
//! ```
//!
//! ## Guarantees
//!
//! For a valid request (`chunk_size >= 1`):
//!
//! - **Lossless**: concatenating the pieces in order reproduces the filtered
//!   text exactly — no character lost, none duplicated.
//! - **Bounded**: every piece except possibly the last has exactly
//!   `chunk_size` characters; the last has between 1 and `chunk_size`.
//! - **Counted**: the number of pieces is `ceil(chars / chunk_size)`, zero
//!   when the filtered text is empty.
//! - **Pure**: no I/O, no hidden state, identical inputs give identical
//!   output.
//!
//! A `chunk_size` of zero is rejected with [`Error::InvalidChunkSize`] before
//! any partitioning happens.
//!
//! Pieces are counted in characters (Unicode scalar values). Grapheme-aware
//! splitting is out of scope: a piece boundary can separate a combining mark
//! from its base character, though it never lands inside a code point.
//!
//! ## The Shell
//!
//! The crate ships a small interactive shell (binary `strips`, behind the
//! default `cli` feature) that renders numbered pieces and copies a chosen
//! piece to the system clipboard. The shell is presentation glue; everything
//! with a behavioral contract lives in this library.

mod error;
mod filter;
mod piece;
mod request;
mod split;

pub use error::{Error, Result};
pub use filter::filter_text;
pub use piece::Piece;
pub use request::SplitRequest;
pub use split::split;
