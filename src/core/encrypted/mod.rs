//! Encrypted configuration.
//!
//! [`EncryptedConfig`] ties the pieces together: it resolves the key,
//! decrypts the document on demand, parses it with the selected format, and
//! memoizes the resulting mapping until the next write.
//!
//! Writes go through [`EncryptedConfig::write`], which re-encrypts and
//! atomically replaces the file. [`EncryptedConfig::change`] runs an edit
//! callback against a temporary plaintext [`Draft`] and commits only if the
//! callback returns `Ok`.
//!
//! No lock is held across `change`: two processes editing the same document
//! concurrently can overwrite each other's edits.

mod access;
mod draft;

use std::fmt;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::config::Options;
use crate::core::document::Document;
use crate::core::domain::Mapping;
use crate::core::format::Serializer;
use crate::core::keys::{EnvSource, Key, KeyResolver, ProcessEnv};
use crate::core::types::PrintableKey;
use crate::error::{CipherError, Result};

pub use draft::Draft;

/// An encrypted configuration document.
pub struct EncryptedConfig {
    document: Document,
    resolver: KeyResolver,
    serializer: Serializer,
    key: Option<Key>,
    config: Option<Mapping>,
}

impl fmt::Debug for EncryptedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedConfig")
            .field("content_path", &self.document.path())
            .field("resolver", &self.resolver)
            .field("serializer", &self.serializer)
            .field("loaded", &self.config.is_some())
            .finish()
    }
}

impl EncryptedConfig {
    // --- Construction ---
    /// Create a configuration that reads env keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the options are invalid.
    pub fn new(options: Options) -> Result<Self> {
        Self::with_env(options, ProcessEnv)
    }

    /// Create a configuration with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the options are invalid.
    pub fn with_env(options: Options, env: impl EnvSource + 'static) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            document: Document::new(options.config_path),
            resolver: KeyResolver::new(options.env_key, options.key_path, env),
            serializer: options.serializer,
            key: None,
            config: None,
        })
    }

    /// Generate a new random key in printable form.
    pub fn generate_key() -> PrintableKey {
        Key::generate()
    }

    /// Path of the encrypted document.
    pub fn content_path(&self) -> &Path {
        self.document.path()
    }

    /// Path of the key file.
    pub fn key_path(&self) -> &Path {
        self.resolver.key_path()
    }

    /// Selected plaintext format.
    pub fn serializer(&self) -> Serializer {
        self.serializer
    }

    // --- Key ---
    /// The resolved key. Resolution happens once per instance; failures
    /// are not cached.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Unavailable` if no key source is present.
    pub fn key(&mut self) -> Result<&Key> {
        cached_key(&mut self.key, &self.resolver)
    }

    /// Whether a key resolves.
    pub fn key_available(&mut self) -> bool {
        self.key().is_ok()
    }

    // --- Reading ---
    /// Decrypted document text, or an empty string if there is no document.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Unavailable` without a key, and
    /// `CipherError::DecryptionFailed` for a malformed or tampered document
    /// or the wrong key.
    pub fn read_plaintext(&mut self) -> Result<Zeroizing<String>> {
        let key = cached_key(&mut self.key, &self.resolver)?;
        let raw = self.document.read_raw()?;

        if raw.trim().is_empty() {
            return Ok(Zeroizing::new(String::new()));
        }

        let bytes = cipher::decrypt(&raw, key)?;
        let text = std::str::from_utf8(&bytes).map_err(|_| {
            CipherError::DecryptionFailed("plaintext is not valid UTF-8".to_string())
        })?;

        Ok(Zeroizing::new(text.to_string()))
    }

    /// The parsed document, loaded on first use and memoized until the next
    /// write.
    ///
    /// # Errors
    ///
    /// Everything [`read_plaintext`](Self::read_plaintext) returns, plus
    /// `SerializeError` if the text does not parse.
    pub fn read(&mut self) -> Result<&Mapping> {
        self.read_mut().map(|mapping| &*mapping)
    }

    /// Drop the memoized mapping so the next read decrypts again.
    pub fn reload(&mut self) {
        self.config = None;
    }

    pub(crate) fn read_mut(&mut self) -> Result<&mut Mapping> {
        let mapping = match self.config.take() {
            Some(mapping) => mapping,
            None => {
                let plaintext = self.read_plaintext()?;
                let mapping = self.serializer.parse(&plaintext)?;
                debug!(
                    path = %self.document.path().display(),
                    keys = mapping.len(),
                    "config loaded"
                );
                mapping
            }
        };
        Ok(self.config.insert(mapping))
    }

    // --- Writing ---
    /// Encrypt `plaintext` and replace the document with it.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Unavailable` without a key, or a `StoreError` if
    /// the file cannot be replaced. The previous document survives failures.
    pub fn write(&mut self, plaintext: &str) -> Result<()> {
        let key = cached_key(&mut self.key, &self.resolver)?;
        let envelope = cipher::encrypt(plaintext.as_bytes(), key)?;
        self.document.write_raw(&envelope)?;
        self.config = None;

        debug!(path = %self.document.path().display(), "config written");
        Ok(())
    }

    /// Edit the decrypted document through a temporary [`Draft`].
    ///
    /// The draft starts with the current plaintext (empty if there is no
    /// document). After `edit` returns `Ok`, the draft is read back and
    /// written if it differs from the original. If `edit` fails, nothing is
    /// written. The draft is deleted on every path.
    ///
    /// # Errors
    ///
    /// Returns read errors before `edit` runs, `edit`'s own error, or write
    /// errors from the commit.
    pub fn change<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Draft) -> Result<()>,
    {
        let original = self.read_plaintext()?;
        let mut draft = Draft::create(
            self.document.path(),
            self.serializer.format().extension(),
            &original,
        )?;
        debug!(draft = %draft.path().display(), "editing draft");

        edit(&mut draft)?;

        let updated = draft.read()?;
        if updated.as_str() == original.as_str() {
            debug!(path = %self.document.path().display(), "no changes to write");
            return Ok(());
        }

        self.write(&updated)
    }

    /// Serialize the in-memory mapping, including unsaved [`set`](Self::set)
    /// calls, and write it.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read) and [`write`](Self::write).
    pub fn save(&mut self) -> Result<()> {
        let serializer = self.serializer;
        let text = Zeroizing::new(serializer.dump(self.read()?)?);
        self.write(&text)
    }
}

/// Resolve into `slot` on first use. The key moves out and back so a failed
/// resolution leaves the slot empty.
fn cached_key<'a>(slot: &'a mut Option<Key>, resolver: &KeyResolver) -> Result<&'a Key> {
    let key = match slot.take() {
        Some(key) => key,
        None => resolver.resolve()?,
    };
    Ok(slot.insert(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Value;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    const ENV_KEY: &str = "LOCKBOX_TEST_KEY";

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("master.key"), Key::generate()).unwrap();
            Self { dir }
        }

        fn options(&self) -> Options {
            Options::new(
                self.dir.path().join("credentials.yml.enc"),
                self.dir.path().join("master.key"),
            )
            .env_key(ENV_KEY)
        }

        fn config(&self) -> EncryptedConfig {
            EncryptedConfig::with_env(self.options(), HashMap::new()).unwrap()
        }
    }

    #[test]
    fn test_missing_document_reads_empty() {
        let fx = Fixture::new();
        let mut config = fx.config();

        assert!(config.read().unwrap().is_empty());
        assert_eq!(config.read_plaintext().unwrap().as_str(), "");
        assert!(!config.content_path().exists());
    }

    #[test]
    fn test_write_then_read() {
        let fx = Fixture::new();
        let mut config = fx.config();

        config.write("something:\n  good: true\n").unwrap();

        assert_eq!(config.read().unwrap()["something"]["good"], true);
        let raw = fs::read_to_string(config.content_path()).unwrap();
        assert!(!raw.contains("good"));
    }

    #[test]
    fn test_write_invalidates_memo() {
        let fx = Fixture::new();
        let mut config = fx.config();

        config.write("a: 1\n").unwrap();
        assert_eq!(config.read().unwrap()["a"], 1i64);

        config.write("a: 2\n").unwrap();
        assert_eq!(config.read().unwrap()["a"], 2i64);
    }

    #[test]
    fn test_no_key_is_unavailable() {
        let fx = Fixture::new();
        fs::remove_file(fx.dir.path().join("master.key")).unwrap();
        let mut config = fx.config();

        assert!(config.read().unwrap_err().is_key_unavailable());
        assert!(config.write("a: 1").unwrap_err().is_key_unavailable());
        assert!(!config.key_available());
    }

    #[test]
    fn test_key_is_cached_per_instance() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("a: 1\n").unwrap();

        fs::remove_file(config.key_path().to_path_buf()).unwrap();
        config.reload();

        assert_eq!(config.read().unwrap()["a"], 1i64);
        assert!(fx.config().read().unwrap_err().is_key_unavailable());
    }

    #[test]
    fn test_change_commits_edits() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("something:\n  good: true\n").unwrap();

        config
            .change(|draft| {
                let mut mapping = Serializer::Yaml.parse(&draft.read()?)?;
                mapping.insert("new", "things");
                draft.write(&Serializer::Yaml.dump(&mapping)?)
            })
            .unwrap();

        assert_eq!(config.read().unwrap()["something"]["good"], true);
        assert_eq!(config.read().unwrap()["new"], "things");
    }

    #[test]
    fn test_change_failure_leaves_document_untouched() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("a: 1\n").unwrap();
        let before = fs::read(config.content_path()).unwrap();

        let mut draft_path = None;
        let err = config
            .change(|draft| {
                draft_path = Some(draft.path().to_path_buf());
                draft.write("a: 2\n")?;
                Err(crate::error::Error::EditAborted("changed my mind".to_string()))
            })
            .unwrap_err();

        assert!(matches!(err, crate::error::Error::EditAborted(_)));
        assert_eq!(fs::read(config.content_path()).unwrap(), before);
        assert!(!draft_path.unwrap().exists());
    }

    #[test]
    fn test_change_without_edits_does_not_rewrite() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("a: 1\n").unwrap();
        let before = fs::read(config.content_path()).unwrap();

        config.change(|_| Ok(())).unwrap();

        assert_eq!(fs::read(config.content_path()).unwrap(), before);
    }

    #[test]
    fn test_change_on_missing_document_creates_it() {
        let fx = Fixture::new();
        let mut config = fx.config();

        config
            .change(|draft| {
                assert_eq!(draft.read()?.as_str(), "");
                draft.write("fresh: true\n")
            })
            .unwrap();

        assert!(config.content_path().exists());
        assert_eq!(config.read().unwrap()["fresh"], true);
    }

    #[test]
    fn test_set_and_save() {
        let fx = Fixture::new();
        let mut config = fx.config();

        config.set("something", "neat").unwrap();
        config.save().unwrap();

        let mut reloaded = fx.config();
        assert_eq!(reloaded.get("something").unwrap(), Some(&Value::from("neat")));
    }

    #[test]
    fn test_set_without_save_is_not_persisted() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("a: 1\n").unwrap();

        config.set("a", 2).unwrap();
        assert_eq!(config.get("a").unwrap(), Some(&Value::Integer(2)));

        assert_eq!(fx.config().get("a").unwrap(), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_corrupt_document_is_not_empty() {
        let fx = Fixture::new();
        let mut config = fx.config();
        fs::write(config.content_path().to_path_buf(), "garbage").unwrap();

        assert!(config.read().unwrap_err().is_decryption_failed());
    }

    #[test]
    fn test_debug_hides_contents() {
        let fx = Fixture::new();
        let mut config = fx.config();
        config.write("password: hunter2\n").unwrap();
        config.read().unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("loaded: true"));
    }
}
