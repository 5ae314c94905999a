//! Test support utilities for lockbox integration tests.
//!
//! Provides an isolated project directory plus helpers to build engines and
//! run the binary against it.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use lockbox::{EncryptedConfig, Key, Options, Serializer};
use tempfile::TempDir;

/// Env variable name used by library tests.
pub const TEST_ENV_KEY: &str = "LOCKBOX_TEST_MASTER_KEY";

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated: library tests inject their
/// environment as a map and child processes use `.current_dir()`, so tests
/// can safely run in parallel.
pub struct Test {
    /// Temporary project directory
    pub dir: TempDir,
}

impl Test {
    /// Create an empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a fresh key file.
    pub fn with_key() -> Self {
        let t = Self::new();
        t.write_key();
        t
    }

    /// Default document path (`config/credentials.yml.enc`).
    pub fn content_path(&self) -> PathBuf {
        self.dir.path().join("config").join("credentials.yml.enc")
    }

    /// Default key path (`config/master.key`).
    pub fn key_path(&self) -> PathBuf {
        self.dir.path().join("config").join("master.key")
    }

    /// Generate a key and write it to the key path, returning it.
    pub fn write_key(&self) -> String {
        let key = Key::generate();
        fs::create_dir_all(self.dir.path().join("config")).expect("failed to create config dir");
        fs::write(self.key_path(), format!("{}\n", key)).expect("failed to write key");
        key
    }

    /// Options pointing at this environment's document and key file.
    pub fn options(&self) -> Options {
        Options::new(self.content_path(), self.key_path()).env_key(TEST_ENV_KEY)
    }

    /// Engine with an empty environment.
    pub fn config(&self) -> EncryptedConfig {
        self.config_with_env(HashMap::new())
    }

    /// Engine with `TEST_ENV_KEY` set to `key`.
    pub fn config_with_env_key(&self, key: &str) -> EncryptedConfig {
        let mut env = HashMap::new();
        env.insert(TEST_ENV_KEY.to_string(), key.to_string());
        self.config_with_env(env)
    }

    /// Engine with an explicit environment.
    pub fn config_with_env(&self, env: HashMap<String, String>) -> EncryptedConfig {
        EncryptedConfig::with_env(self.options(), env).expect("invalid options")
    }

    /// Engine using the JSON format.
    pub fn json_config(&self) -> EncryptedConfig {
        let options = Options::new(
            self.dir.path().join("config").join("credentials.json.enc"),
            self.key_path(),
        )
        .serializer(Serializer::Json);
        EncryptedConfig::with_env(options, HashMap::new()).expect("invalid options")
    }

    /// Raw bytes of the encrypted document.
    pub fn raw_document(&self) -> Vec<u8> {
        fs::read(self.content_path()).expect("failed to read document")
    }
}
