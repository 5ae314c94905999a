//! YAML format (default).

use super::{into_mapping, Format};
use crate::core::domain::{Mapping, Value};
use crate::error::{Result, SerializeError};

const NAME: &str = "yaml";

/// YAML documents via `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Format for Yaml {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extension(&self) -> &'static str {
        "yml"
    }

    fn parse(&self, text: &str) -> Result<Mapping> {
        if text.trim().is_empty() {
            return Ok(Mapping::new());
        }

        let mut document: serde_yaml::Value = serde_yaml::from_str(text).map_err(parse_error)?;
        // Resolve `<<: *anchor` merge keys before converting.
        document.apply_merge().map_err(parse_error)?;
        let value: Value = serde_yaml::from_value(document).map_err(parse_error)?;

        into_mapping(NAME, value)
    }

    fn dump(&self, mapping: &Mapping) -> Result<String> {
        serde_yaml::to_string(mapping).map_err(|e| {
            SerializeError::Dump {
                format: NAME,
                message: e.to_string(),
            }
            .into()
        })
    }
}

fn parse_error(e: serde_yaml::Error) -> SerializeError {
    let location = e.location();
    SerializeError::Parse {
        format: NAME,
        message: e.to_string(),
        line: location.as_ref().map(|l| l.line()),
        column: location.as_ref().map(|l| l.column()),
    }
}
