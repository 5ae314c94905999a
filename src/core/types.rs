//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An envelope string: `base64(ciphertext)--base64(iv)--base64(tag)`.
pub type EncryptedValue = String;

/// A printable (hex) encoding of a key, as stored in key files and env vars.
pub type PrintableKey = String;

/// A key within a configuration mapping.
pub type MappingKey = String;
