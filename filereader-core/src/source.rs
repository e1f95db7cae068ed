//! Raw content access. The only step of the pipeline that touches the
//! filesystem, and the only one that suspends on the async face.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{ReadError, ReadResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads the full content of the file at `path` as text.
///
/// Fails with `InvalidArgument` for a blank path and `NotFound` when no
/// regular file exists there. A UTF-8 byte-order mark is stripped and invalid
/// UTF-8 sequences are replaced with U+FFFD.
pub fn read_raw(path: &str) -> ReadResult<String> {
    let file = checked_path(path)?;
    if !file.is_file() {
        return Err(ReadError::NotFound(path.to_string()));
    }

    let bytes = std::fs::read(file).map_err(|e| classify_io(e, path))?;
    debug!(path = %path, bytes = bytes.len(), "Read raw content");
    Ok(decode(bytes))
}

/// Async face of [`read_raw`]; identical results and failure classification.
pub async fn read_raw_async(path: &str) -> ReadResult<String> {
    let file = checked_path(path)?;
    let is_file = match tokio::fs::metadata(file).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    };
    if !is_file {
        return Err(ReadError::NotFound(path.to_string()));
    }

    let bytes = tokio::fs::read(file).await.map_err(|e| classify_io(e, path))?;
    debug!(path = %path, bytes = bytes.len(), "Read raw content");
    Ok(decode(bytes))
}

pub(crate) fn check_path(path: &str) -> ReadResult<()> {
    if path.trim().is_empty() {
        return Err(ReadError::invalid_argument("path must not be blank"));
    }
    Ok(())
}

fn checked_path(path: &str) -> ReadResult<&Path> {
    check_path(path)?;
    Ok(Path::new(path))
}

// The file can vanish between the existence check and the read.
fn classify_io(err: io::Error, path: &str) -> ReadError {
    if err.kind() == io::ErrorKind::NotFound {
        ReadError::NotFound(path.to_string())
    } else {
        ReadError::Io(err)
    }
}

fn decode(mut bytes: Vec<u8>) -> String {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
