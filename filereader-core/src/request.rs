use crate::error::{ReadError, ReadResult};
use crate::format::Format;
use crate::source::check_path;

/// One read, as chosen by the caller. Consumed by a single
/// [`FileReader::read`](crate::FileReader::read) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub format: Format,
    pub path: String,
    pub use_encryption: bool,
    pub use_authorization: bool,
    /// Present and non-blank iff `use_authorization` is set.
    pub role: Option<String>,
}

impl ReadRequest {
    pub fn new(format: Format, path: impl Into<String>) -> Self {
        Self {
            format,
            path: path.into(),
            use_encryption: false,
            use_authorization: false,
            role: None,
        }
    }

    /// Decrypt the raw content before parsing.
    pub fn encrypted(mut self) -> Self {
        self.use_encryption = true;
        self
    }

    /// Authorize the read for `role` before touching the filesystem.
    pub fn authorized_as(mut self, role: impl Into<String>) -> Self {
        self.use_authorization = true;
        self.role = Some(role.into());
        self
    }

    /// Checks the request shape without touching the filesystem.
    pub fn validate(&self) -> ReadResult<()> {
        check_path(&self.path)?;

        let role_given = self.role.as_deref().is_some_and(|r| !r.trim().is_empty());
        match (self.use_authorization, role_given) {
            (true, false) => Err(ReadError::invalid_argument(
                "role must not be blank when authorization is requested",
            )),
            (false, true) => Err(ReadError::invalid_argument(
                "role given but authorization was not requested",
            )),
            _ => Ok(()),
        }
    }
}
