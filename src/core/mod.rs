//! Core library components.
//!
//! Key resolution, the envelope cipher, plaintext formats, document storage,
//! and the [`EncryptedConfig`](encrypted::EncryptedConfig) engine that ties
//! them together.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod document;
pub mod domain;
pub mod encrypted;
pub mod format;
pub mod keys;
pub mod types;
