//! Error types for QuickCut.

use thiserror::Error;

/// Main error type for QuickCut timeline operations.
#[derive(Error, Debug)]
pub enum QuickcutError {
    #[error("clip index {index} out of range (timeline has {len} clips)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for QuickCut operations.
pub type Result<T> = std::result::Result<T, QuickcutError>;
