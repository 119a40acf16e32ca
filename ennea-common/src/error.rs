//! Common error types for the Enneagram service

use thiserror::Error;

/// Common result type for Enneagram operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the library and the web service
#[derive(Error, Debug)]
pub enum Error {
    /// Answer set length does not match the question table
    #[error("Invalid answer count: expected {expected}, got {actual}")]
    InvalidAnswerCount { expected: usize, actual: usize },

    /// Answer value outside the 1-5 Likert range
    #[error("Answer out of range at position {position}: {value} (expected 1-5)")]
    AnswerOutOfRange { position: usize, value: i64 },

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding of stored columns
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for errors caused by the caller's input rather than the service
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidAnswerCount { .. } | Error::AnswerOutOfRange { .. } | Error::InvalidInput(_)
        )
    }
}
