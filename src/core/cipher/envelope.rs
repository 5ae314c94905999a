//! Envelope text format.
//!
//! An envelope is three base64 fields joined by `--`:
//! ciphertext, initialization vector, authentication tag.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::core::constants::{ENVELOPE_SEPARATOR, NONCE_LEN, TAG_LEN};
use crate::core::types::EncryptedValue;
use crate::error::{CipherError, Result};

/// Decoded envelope fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; NONCE_LEN],
    pub tag: [u8; TAG_LEN],
}

impl Envelope {
    /// Encode the envelope as text.
    pub fn seal(&self) -> EncryptedValue {
        [
            BASE64.encode(&self.ciphertext),
            BASE64.encode(self.iv),
            BASE64.encode(self.tag),
        ]
        .join(ENVELOPE_SEPARATOR)
    }

    /// Parse envelope text. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` for a wrong field count,
    /// invalid base64, or an IV/tag of the wrong length.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.trim().split(ENVELOPE_SEPARATOR).collect();
        let [ciphertext, iv, tag] = parts.as_slice() else {
            return Err(malformed(format!(
                "expected 3 fields, found {}",
                parts.len()
            )));
        };

        Ok(Self {
            ciphertext: decode_field("ciphertext", ciphertext)?,
            iv: decode_fixed("iv", iv)?,
            tag: decode_fixed("auth tag", tag)?,
        })
    }
}

fn decode_field(field: &str, text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| malformed(format!("invalid base64 in {}: {}", field, e)))
}

fn decode_fixed<const N: usize>(field: &str, text: &str) -> Result<[u8; N]> {
    let bytes = decode_field(field, text)?;
    bytes.as_slice().try_into().map_err(|_| {
        malformed(format!(
            "{} must be {} bytes, got {}",
            field,
            N,
            bytes.len()
        ))
    })
}

fn malformed(reason: String) -> crate::error::Error {
    CipherError::DecryptionFailed(format!("malformed envelope: {}", reason)).into()
}
