//! Error types for the read pipeline.

use std::fmt;

use filereader_crypto::DecryptError;
use thiserror::Error;

use crate::format::Format;

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors that can abort a read.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Blank path, blank role, or a capability missing where one is required.
    #[error("{0}")]
    InvalidArgument(String),

    /// No regular file exists at the path.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The authorizer denied the read. Nothing was read from disk.
    #[error("role '{role}' is not authorized to read '{path}'")]
    Unauthorized { role: String, path: String },

    /// The (possibly decrypted) content is not well-formed.
    #[error("malformed {format} content: {message}")]
    Parse { format: Format, message: String },

    /// The decryptor rejected or failed on the raw content.
    #[error(transparent)]
    Decryption(#[from] DecryptError),

    /// Any other filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn parse(format: Format, message: impl fmt::Display) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Classifies the error for callers that report by kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::Decryption(DecryptError::InvalidInput(_)) => ErrorKind::InvalidArgument,
            Self::Decryption(DecryptError::Failed(_)) => ErrorKind::DecryptionFailed,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Failure classification shared by every format and capability combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unauthorized,
    ParseError,
    DecryptionFailed,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::ParseError => "ParseError",
            Self::DecryptionFailed => "DecryptionFailed",
            Self::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
