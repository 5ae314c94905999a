//! JSON format.

use super::{into_mapping, Format};
use crate::core::domain::{Mapping, Value};
use crate::error::{Result, SerializeError};

const NAME: &str = "json";

/// JSON documents via `serde_json`, dumped pretty-printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Format for Json {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Mapping> {
        if text.trim().is_empty() {
            return Ok(Mapping::new());
        }

        let value: Value = serde_json::from_str(text).map_err(|e| SerializeError::Parse {
            format: NAME,
            message: e.to_string(),
            line: (e.line() > 0).then(|| e.line()),
            column: (e.line() > 0).then(|| e.column()),
        })?;

        into_mapping(NAME, value)
    }

    fn dump(&self, mapping: &Mapping) -> Result<String> {
        let mut text = serde_json::to_string_pretty(mapping).map_err(|e| SerializeError::Dump {
            format: NAME,
            message: e.to_string(),
        })?;
        text.push('\n');
        Ok(text)
    }
}
