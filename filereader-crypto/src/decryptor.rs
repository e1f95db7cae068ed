//! Abstract decryption interface used by the read pipeline.
//!
//! Decryptors are pure functions of their input: no hidden state, no I/O.
//! They are shared read-only across any number of concurrent reads.

use async_trait::async_trait;

use crate::error::DecryptResult;

/// Trait for turning cipher text into plain text.
#[async_trait]
pub trait TextDecryptor: Send + Sync {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Decrypt the entire `cipher_text`.
    fn decrypt(&self, cipher_text: &str) -> DecryptResult<String>;

    /// Suspension-capable face of [`decrypt`](Self::decrypt).
    ///
    /// Must produce exactly the same result as the synchronous face.
    async fn decrypt_async(&self, cipher_text: &str) -> DecryptResult<String> {
        self.decrypt(cipher_text)
    }
}

/// Placeholder transform that reverses the character sequence.
///
/// Reversal is self-inverse, so the same transform encrypts and decrypts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseTextDecryptor;

impl TextDecryptor for ReverseTextDecryptor {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn decrypt(&self, cipher_text: &str) -> DecryptResult<String> {
        Ok(cipher_text.chars().rev().collect())
    }
}

/// Produces cipher text that [`ReverseTextDecryptor`] turns back into `plain_text`.
pub fn encrypt_reversed(plain_text: &str) -> String {
    plain_text.chars().rev().collect()
}

/// No-op decryptor. Content passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDecryptor;

impl TextDecryptor for PassthroughDecryptor {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn decrypt(&self, cipher_text: &str) -> DecryptResult<String> {
        Ok(cipher_text.to_string())
    }
}
