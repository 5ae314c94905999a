//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can match
//! on the category they care about and propagate the rest with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Key resolution and key file errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Neither the environment variable nor the key file supplied a key.
    #[error("missing encryption key: set {} or create {}", .env_key.as_deref().unwrap_or("an env key"), .key_path.display())]
    Unavailable {
        env_key: Option<String>,
        key_path: PathBuf,
    },

    #[error("invalid key format from {source_name}: {reason}")]
    InvalidFormat { source_name: String, reason: String },

    #[error("invalid key length from {source_name}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        source_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("key file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to read key file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write key file: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Envelope encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Malformed envelope, authentication failure, or wrong key.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Encrypted document storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Plaintext document (de)serialization errors.
#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("{format} parse error{}: {message}", location(.line, .column))]
    Parse {
        format: &'static str,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("{format} document must be a mapping at the top level, found {found}")]
    NotAMapping {
        format: &'static str,
        found: &'static str,
    },

    #[error("{format} serialize error: {message}")]
    Dump {
        format: &'static str,
        message: String,
    },
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!(" at line {} column {}", line, column),
        (Some(line), None) => format!(" at line {}", line),
        _ => String::new(),
    }
}

/// Construction options and project config file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown serializer: {0} (expected yaml or json)")]
    UnknownSerializer(String),
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Raised by an edit callback to abandon a change without committing.
    #[error("edit aborted: {0}")]
    EditAborted(String),

    #[error("no value at {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when no key source resolved.
    pub fn is_key_unavailable(&self) -> bool {
        matches!(self, Error::Key(KeyError::Unavailable { .. }))
    }

    /// True for malformed envelopes and authentication failures.
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Error::Cipher(CipherError::DecryptionFailed(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
