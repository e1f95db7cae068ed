//! Error types for the decryption layer.

use thiserror::Error;

/// Result type for decryption operations.
pub type DecryptResult<T> = Result<T, DecryptError>;

/// Errors that can occur while decrypting text.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The cipher text was rejected before any transform ran.
    #[error("invalid cipher input: {0}")]
    InvalidInput(String),

    /// The transform itself failed (wrong key, tampered data).
    #[error("decryption failed: {0}")]
    Failed(String),
}
