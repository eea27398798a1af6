//! Error types for the Pacer engine.

use thiserror::Error;

/// Main error type for Pacer operations.
///
/// The admission decision itself is total and never fails; errors only
/// arise on the configuration surface.
#[derive(Error, Debug)]
pub enum PacerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pacer operations.
pub type Result<T> = std::result::Result<T, PacerError>;
