//! Shared fixtures for reader tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A file written into its own temporary directory. The directory is removed
/// when the fixture drops.
pub struct Fixture {
    _dir: TempDir,
    pub path: String,
}

pub fn write_fixture(name: &str, content: &str) -> Fixture {
    write_fixture_bytes(name, content.as_bytes())
}

pub fn write_fixture_bytes(name: &str, content: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    Fixture {
        path: path_string(path),
        _dir: dir,
    }
}

/// Writes `plain` reversed, as the reverse decryptor expects it on disk.
pub fn write_encrypted_fixture(name: &str, plain: &str) -> Fixture {
    write_fixture(name, &filereader_crypto::encrypt_reversed(plain))
}

/// A path inside a fresh temporary directory that does not exist.
pub fn missing_path() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = path_string(dir.path().join("does-not-exist.txt"));
    (dir, path)
}

fn path_string(path: PathBuf) -> String {
    path.to_str().unwrap().to_string()
}

pub const BLANK_PATHS: [&str; 4] = ["", " ", "\t", " \n "];
