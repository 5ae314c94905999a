//! Generate-key command.

use crate::cli::output;
use crate::core::config::Options;
use crate::core::encrypted::EncryptedConfig;
use crate::core::keys::Key;
use crate::error::Result;

/// Print a new key, or write it to the configured key path.
pub fn execute(options: &Options, write: bool) -> Result<()> {
    let printable = EncryptedConfig::generate_key();

    if !write {
        output::data(&printable);
        return Ok(());
    }

    Key::from_hex(&printable, "generated key")?.write_to(&options.key_path)?;
    output::success(&format!("wrote key to {}", output::path(&options.key_path)));
    output::hint("keep this file out of version control");
    Ok(())
}
