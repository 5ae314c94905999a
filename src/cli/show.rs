//! Show command.

use crate::cli::output;
use crate::core::config::Options;
use crate::core::encrypted::EncryptedConfig;
use crate::error::Result;

/// Print the decrypted document.
pub fn execute(options: Options) -> Result<()> {
    let mut config = EncryptedConfig::new(options)?;
    let plaintext = config.read_plaintext()?;
    output::data(&plaintext);
    Ok(())
}
