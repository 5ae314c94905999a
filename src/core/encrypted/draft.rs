//! Temporary plaintext file used by [`EncryptedConfig::change`].
//!
//! [`EncryptedConfig::change`]: super::EncryptedConfig::change

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use zeroize::Zeroizing;

use crate::error::Result;

/// A decrypted copy of the document in the system temp directory.
///
/// The file is created with owner-only permissions and removed when the
/// draft is dropped. Reads and writes go through the path, so an external
/// editor that replaces the file is picked up.
#[derive(Debug)]
pub struct Draft {
    file: NamedTempFile,
}

impl Draft {
    pub(super) fn create(content_path: &Path, extension: &str, contents: &str) -> Result<Self> {
        let prefix = format!("{}.", draft_stem(content_path, extension));
        let suffix = format!(".{}", extension);

        let mut file = Builder::new().prefix(&prefix).suffix(&suffix).tempfile()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        Ok(Self { file })
    }

    /// Location of the draft, e.g. for handing to an editor.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Current draft contents.
    pub fn read(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(fs::read_to_string(self.path())?))
    }

    /// Replace the draft contents.
    pub fn write(&mut self, contents: &str) -> Result<()> {
        fs::write(self.path(), contents)?;
        Ok(())
    }
}

/// `config/credentials.yml.enc` drafts as `credentials.<random>.yml`.
fn draft_stem(content_path: &Path, extension: &str) -> String {
    let name = content_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    let name = name.strip_suffix(".enc").unwrap_or(&name);
    let name = name
        .strip_suffix(&format!(".{}", extension))
        .unwrap_or(name);

    if name.is_empty() {
        "config".to_string()
    } else {
        name.to_string()
    }
}
