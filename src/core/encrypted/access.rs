//! Keyed access to the decrypted mapping.

use super::EncryptedConfig;
use crate::core::domain::Value;
use crate::core::types::MappingKey;
use crate::error::Result;

impl EncryptedConfig {
    /// Value under a top-level key.
    pub fn get(&mut self, key: &str) -> Result<Option<&Value>> {
        Ok(self.read()?.get(key))
    }

    /// Value at a nested path, `None` as soon as a segment is missing.
    pub fn dig<S: AsRef<str>>(&mut self, path: &[S]) -> Result<Option<&Value>> {
        Ok(self.read()?.dig(path))
    }

    /// Value under a top-level key, or `default` if absent.
    pub fn fetch(&mut self, key: &str, default: impl Into<Value>) -> Result<Value> {
        Ok(self
            .read()?
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.into()))
    }

    /// Set a top-level key in memory. Call [`save`](Self::save) to persist.
    ///
    /// Returns the previous value, if any.
    pub fn set(
        &mut self,
        key: impl Into<MappingKey>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        Ok(self.read_mut()?.insert(key, value))
    }
}
