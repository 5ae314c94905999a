//! Cryptographic operations.
//!
//! Provides the authenticated encryption abstraction and its AES-GCM
//! implementation. A cipher turns plaintext bytes into a textual
//! [`Envelope`] and back; any tampering or wrong key fails decryption
//! instead of yielding altered plaintext.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `chacha.rs`)
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::keys::Key;
use crate::core::types::EncryptedValue;
use crate::error::Result;

mod aes_gcm;
mod envelope;

pub use self::aes_gcm::AesGcm;
pub use self::envelope::Envelope;

/// Authenticated symmetric cipher.
pub trait Cipher {
    /// Encrypt plaintext under `key` with a fresh random nonce.
    ///
    /// # Returns
    ///
    /// The envelope text: `base64(ciphertext)--base64(iv)--base64(tag)`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the primitive fails.
    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<EncryptedValue>;

    /// Decrypt an envelope produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the envelope is malformed,
    /// truncated, tampered with, or was sealed under a different key.
    fn decrypt(&self, envelope: &str, key: &Key) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Encrypt with the default AES-GCM backend.
///
/// This is a convenience wrapper around `AesGcm::encrypt`.
pub fn encrypt(plaintext: &[u8], key: &Key) -> Result<EncryptedValue> {
    AesGcm.encrypt(plaintext, key)
}

/// Decrypt with the default AES-GCM backend.
///
/// This is a convenience wrapper around `AesGcm::decrypt`.
pub fn decrypt(envelope: &str, key: &Key) -> Result<Zeroizing<Vec<u8>>> {
    AesGcm.decrypt(envelope, key)
}
