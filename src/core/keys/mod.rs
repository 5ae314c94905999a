//! Key resolution.
//!
//! A key comes from one of two sources, in order of precedence:
//!
//! 1. An environment variable (looked up through an [`EnvSource`]), if set
//!    and non-empty.
//! 2. The key file at the configured path, trimmed.
//!
//! Both sources hold the key as lowercase hex. If neither resolves, the
//! resolver fails with `KeyError::Unavailable`.

use std::fmt;
use std::path::{Path, PathBuf};

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes128Gcm;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::KEY_LEN;
use crate::core::types::PrintableKey;
use crate::error::{KeyError, Result};

mod env;
mod file;

pub use env::{EnvSource, ProcessEnv};

/// A symmetric key for the document cipher.
///
/// Key bytes are zeroed on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Zeroizing<[u8; KEY_LEN]>);

impl Key {
    /// Generate a fresh random key and return its printable (hex) form.
    pub fn generate() -> PrintableKey {
        let key = Aes128Gcm::generate_key(&mut OsRng);
        hex::encode(key)
    }

    /// Decode a key from its printable form.
    ///
    /// `source_name` names where the text came from, for error messages.
    pub fn from_hex(text: &str, source_name: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(text.trim()).map_err(|e| {
            KeyError::InvalidFormat {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            }
        })?);

        if decoded.len() != KEY_LEN {
            return Err(KeyError::InvalidLength {
                source_name: source_name.to_string(),
                expected: KEY_LEN,
                actual: decoded.len(),
            }
            .into());
        }

        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Printable (hex) form of this key.
    pub fn to_hex(&self) -> Zeroizing<PrintableKey> {
        Zeroizing::new(hex::encode(&self.0[..]))
    }

    /// Write this key to a new key file with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::AlreadyExists` rather than replace an existing key.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        file::write_key_file(path, &self.to_hex())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Resolves the document key from the environment or a key file.
pub struct KeyResolver {
    env_key: Option<String>,
    key_path: PathBuf,
    env: Box<dyn EnvSource>,
}

impl fmt::Debug for KeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyResolver")
            .field("env_key", &self.env_key)
            .field("key_path", &self.key_path)
            .finish()
    }
}

impl KeyResolver {
    /// Create a resolver.
    ///
    /// # Arguments
    ///
    /// * `env_key` - Environment variable name to consult first, if any
    /// * `key_path` - Key file consulted when the variable is unset or empty
    /// * `env` - Environment lookup capability
    pub fn new(
        env_key: Option<String>,
        key_path: impl Into<PathBuf>,
        env: impl EnvSource + 'static,
    ) -> Self {
        Self {
            env_key,
            key_path: key_path.into(),
            env: Box::new(env),
        }
    }

    /// Key file path.
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Environment variable name, if configured.
    pub fn env_key(&self) -> Option<&str> {
        self.env_key.as_deref()
    }

    /// Resolve the key by precedence: env var, then key file.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Unavailable` if neither source is present, or a
    /// format/length error if the present source does not hold a valid key.
    pub fn resolve(&self) -> Result<Key> {
        if let Some(name) = self.env_key.as_deref() {
            if let Some(value) = self.env.lookup(name) {
                let value = Zeroizing::new(value);
                if !value.trim().is_empty() {
                    debug!(env_key = name, "key resolved from environment");
                    return Key::from_hex(&value, name);
                }
            }
        }

        if let Some(contents) = file::read_key_file(&self.key_path)? {
            debug!(path = %self.key_path.display(), "key resolved from key file");
            return Key::from_hex(&contents, &self.key_path.display().to_string());
        }

        Err(KeyError::Unavailable {
            env_key: self.env_key.clone(),
            key_path: self.key_path.clone(),
        }
        .into())
    }
}
