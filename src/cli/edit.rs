//! Edit command.
//!
//! Opens the decrypted document in `$EDITOR` (or `vi`) and re-encrypts it on
//! exit. The editor string runs through `sh -c` so values like `code --wait`
//! work.

use std::process::Command;

use tracing::debug;

use crate::cli::output;
use crate::core::config::Options;
use crate::core::encrypted::EncryptedConfig;
use crate::error::{Error, Result};

const DEFAULT_EDITOR: &str = "vi";

/// Edit the document in an external editor.
pub fn execute(options: Options) -> Result<()> {
    let mut config = EncryptedConfig::new(options)?;
    let serializer = config.serializer();
    let editor = editor();

    config.change(|draft| {
        debug!(editor = %editor, "launching editor");
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("{} \"$1\"", editor))
            .arg("lockbox-edit")
            .arg(draft.path())
            .status()?;

        if !status.success() {
            return Err(Error::EditAborted(format!("editor exited with {}", status)));
        }

        // Refuse to store a document that will not load.
        serializer.parse(&draft.read()?)?;
        Ok(())
    })?;

    output::success(&format!("saved {}", output::path(config.content_path())));
    Ok(())
}

fn editor() -> String {
    std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}
