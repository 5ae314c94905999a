//! AES-GCM encryption backend implementation.
//!
//! Encrypts with AES-128-GCM using a random 96-bit nonce per call and
//! stores the detached authentication tag in the envelope.

use ::aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit, OsRng};
use ::aes_gcm::{Aes128Gcm, Key as AesKey, Nonce, Tag};
use tracing::trace;
use zeroize::Zeroizing;

use super::{Cipher, Envelope};
use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::core::keys::Key;
use crate::core::types::EncryptedValue;
use crate::error::{CipherError, Result};

/// AES-128-GCM backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcm;

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-128-gcm"
    }

    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<EncryptedValue> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let cipher = Aes128Gcm::new(AesKey::<Aes128Gcm>::from_slice(key.as_bytes()));
        let nonce = Aes128Gcm::generate_nonce(&mut OsRng);

        let mut buffer = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(&nonce, b"", &mut buffer)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut envelope = Envelope {
            ciphertext: buffer,
            iv: [0u8; NONCE_LEN],
            tag: [0u8; TAG_LEN],
        };
        envelope.iv.copy_from_slice(nonce.as_slice());
        envelope.tag.copy_from_slice(tag.as_slice());
        let sealed = envelope.seal();

        trace!(envelope_len = sealed.len(), "encrypted");
        Ok(sealed)
    }

    fn decrypt(&self, envelope: &str, key: &Key) -> Result<Zeroizing<Vec<u8>>> {
        trace!(envelope_len = envelope.len(), "decrypting");

        let Envelope {
            ciphertext,
            iv,
            tag,
        } = Envelope::parse(envelope)?;

        let cipher = Aes128Gcm::new(AesKey::<Aes128Gcm>::from_slice(key.as_bytes()));
        let mut buffer = Zeroizing::new(ciphertext);
        cipher
            .decrypt_in_place_detached(
                Nonce::from_slice(&iv),
                b"",
                &mut buffer,
                Tag::from_slice(&tag),
            )
            .map_err(|_| {
                CipherError::DecryptionFailed(
                    "authentication failed (wrong key or tampered document)".to_string(),
                )
            })?;

        trace!(plaintext_len = buffer.len(), "decrypted");
        Ok(buffer)
    }
}
