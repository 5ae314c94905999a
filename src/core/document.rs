//! Encrypted document file.
//!
//! Reads the envelope text from disk and replaces it atomically: content is
//! written to a temp file in the same directory, synced, then renamed over
//! the target. A missing file reads as empty.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, StoreError};

/// The on-disk encrypted document.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Raw file content, or an empty string if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` for any error other than not-found.
    pub fn read_raw(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                debug!(path = %self.path.display(), len = contents.len(), "document read");
                Ok(contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "document missing, treating as empty");
                Ok(String::new())
            }
            Err(source) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    /// Atomically replace the file's content, creating parent directories.
    ///
    /// An existing file keeps its permissions. On failure the previous file,
    /// if any, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if any step fails.
    pub fn write_raw(&self, content: &str) -> Result<()> {
        let write_failed = |source: std::io::Error| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_failed)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
        tmp.write_all(content.as_bytes()).map_err(write_failed)?;
        if let Ok(previous) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(previous.permissions())
                .map_err(write_failed)?;
        }
        tmp.as_file().sync_all().map_err(write_failed)?;
        tmp.persist(&self.path).map_err(|e| write_failed(e.error))?;

        debug!(path = %self.path.display(), len = content.len(), "document written");
        Ok(())
    }
}
