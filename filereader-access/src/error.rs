//! Error types for access policy loading.

use thiserror::Error;

/// Errors that can occur while loading an access policy.
///
/// Authorization decisions themselves never fail: malformed input is denied.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid policy file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for access policy operations.
pub type AccessResult<T> = Result<T, AccessError>;
