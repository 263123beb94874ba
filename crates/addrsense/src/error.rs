//! Error types for the facade.

use addrsense_core::{ChecksumError, OptionsError};
use thiserror::Error;

/// Errors surfaced by the typed facade API.
#[derive(Debug, Error)]
pub enum AddrsenseError {
    /// Configuration rejected by the option validator.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),

    /// A checksum encoder was given a malformed body.
    #[error("checksum error: {0}")]
    Checksum(#[from] ChecksumError),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, AddrsenseError>;
