//! Constants used throughout lockbox.
//!
//! Centralizes magic strings and cipher parameters.

/// Project config file name (lockbox.toml).
pub const CONFIG_FILE: &str = "lockbox.toml";

/// Default encrypted document path.
pub const CONTENT_FILE: &str = "config/credentials.yml.enc";

/// Default key file path.
pub const KEY_FILE: &str = "config/master.key";

/// Default environment variable consulted for the key.
pub const ENV_KEY: &str = "LOCKBOX_MASTER_KEY";

/// Separator between the base64 fields of an envelope.
///
/// The standard base64 alphabet never contains `-`, so splitting is unambiguous.
pub const ENVELOPE_SEPARATOR: &str = "--";

/// AES-128-GCM key length in bytes.
pub const KEY_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96-bit).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Required permissions for key files on Unix.
pub const KEY_FILE_MODE: u32 = 0o600;
