//! Error types for strips.

/// Errors that can occur when splitting text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be >= 1).
    #[error("invalid chunk size: {0} (must be >= 1)")]
    InvalidChunkSize(usize),
}

/// Result type for strips operations.
pub type Result<T> = std::result::Result<T, Error>;
