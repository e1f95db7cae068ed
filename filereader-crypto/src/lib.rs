//! Decryption layer for filereader.
//!
//! Readers never decide how content is decrypted. They depend on a
//! `&dyn TextDecryptor` (or `Arc<dyn TextDecryptor>`) and hand it the full raw
//! file content before any parsing happens.
//!
//! The shipped transform is a reversible placeholder, not a security
//! primitive:
//! - `ReverseTextDecryptor`: reverses the character sequence
//! - `PassthroughDecryptor`: returns the input unchanged

mod decryptor;
mod error;

pub use decryptor::{PassthroughDecryptor, ReverseTextDecryptor, TextDecryptor, encrypt_reversed};
pub use error::{DecryptError, DecryptResult};
