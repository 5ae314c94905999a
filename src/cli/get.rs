//! Get command.
//!
//! Scalars print as plain text, mappings in the document's format, and
//! sequences as compact JSON.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Options;
use crate::core::domain::Value;
use crate::core::encrypted::EncryptedConfig;
use crate::error::{Error, Result};

/// Print the value at a key path.
pub fn execute(options: Options, path: &[String]) -> Result<()> {
    let mut config = EncryptedConfig::new(options)?;
    let serializer = config.serializer();

    let text = match config.dig(path)? {
        Some(Value::Mapping(mapping)) => Zeroizing::new(serializer.dump(mapping)?),
        Some(value) => Zeroizing::new(value.to_string()),
        None => return Err(Error::NotFound(path.join("."))),
    };

    output::data(&text);
    Ok(())
}
