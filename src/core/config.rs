//! Construction options.
//!
//! Options say where the encrypted document and key file live, which
//! environment variable may hold the key, and which format the plaintext
//! uses. They can be built in code or read from a `lockbox.toml` file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::format::Serializer;
use crate::error::{ConfigError, Result};

/// Options for an [`EncryptedConfig`](crate::core::encrypted::EncryptedConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Where the encrypted document lives
    pub config_path: PathBuf,
    /// Where the key file lives
    pub key_path: PathBuf,
    /// Environment variable consulted before the key file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_key: Option<String>,
    /// Plaintext format
    #[serde(default)]
    pub serializer: Serializer,
}

impl Options {
    /// Options with no env key and the default (YAML) serializer.
    pub fn new(config_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            key_path: key_path.into(),
            env_key: None,
            serializer: Serializer::default(),
        }
    }

    /// Set the environment variable consulted for the key.
    pub fn env_key(mut self, name: impl Into<String>) -> Self {
        self.env_key = Some(name.into());
        self
    }

    /// Set the plaintext format.
    pub fn serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }

    /// Path to the project config file in the current directory.
    pub fn config_file() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load options from a TOML file.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// cannot be read or parsed, or a validation error.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading options");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut options: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            options.config_path = base.join(&options.config_path);
            options.key_path = base.join(&options.key_path);
        }

        options.validate()?;

        debug!(
            config_path = %options.config_path.display(),
            key_path = %options.key_path.display(),
            serializer = %options.serializer,
            "options loaded"
        );
        Ok(options)
    }

    /// Validate the options.
    ///
    /// Checks:
    /// - Both paths are non-empty
    /// - `env_key`, if present, is a plausible variable name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` or `ConfigError::InvalidValue`.
    pub fn validate(&self) -> Result<()> {
        if self.config_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "config_path",
            }
            .into());
        }

        if self.key_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "key_path" }.into());
        }

        if let Some(name) = &self.env_key {
            if name.is_empty() || name.contains('=') || name.contains('\0') {
                return Err(ConfigError::InvalidValue {
                    field: "env_key",
                    reason: format!("not a valid environment variable name: {:?}", name),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(constants::CONTENT_FILE, constants::KEY_FILE).env_key(constants::ENV_KEY)
    }
}
