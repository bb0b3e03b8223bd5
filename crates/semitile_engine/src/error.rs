//! Unified error types for semitile_engine

use thiserror::Error;

/// Main error type for semitile_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Loading Errors ===
    #[error("Invalid data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    // === Settings Errors ===
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type alias for semitile_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an error for a buffer of the wrong size
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidDataLength { expected, actual }
    }
}
