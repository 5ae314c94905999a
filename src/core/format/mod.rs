//! Plaintext document formats.
//!
//! A [`Format`] turns decrypted text into a [`Mapping`] and back. The
//! [`Serializer`] enum selects which one a configuration uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::domain::{Mapping, Value};
use crate::error::{ConfigError, Result, SerializeError};

mod json;
mod yaml;

pub use json::Json;
pub use yaml::Yaml;

/// Text encoding for the plaintext document.
pub trait Format {
    /// Format name for errors and logs.
    fn name(&self) -> &'static str;

    /// File extension used for edit drafts, without the dot.
    fn extension(&self) -> &'static str;

    /// Parse document text into a mapping.
    ///
    /// Blank text and a top-level null parse to an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::Parse` for syntax errors and
    /// `SerializeError::NotAMapping` for any other top-level value.
    fn parse(&self, text: &str) -> Result<Mapping>;

    /// Render a mapping as document text.
    fn dump(&self, mapping: &Mapping) -> Result<String>;
}

/// Which [`Format`] a configuration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Serializer {
    #[default]
    Yaml,
    Json,
}

impl Serializer {
    /// The format implementation for this selection.
    pub fn format(self) -> &'static dyn Format {
        match self {
            Serializer::Yaml => &Yaml,
            Serializer::Json => &Json,
        }
    }

    pub fn parse(self, text: &str) -> Result<Mapping> {
        self.format().parse(text)
    }

    pub fn dump(self, mapping: &Mapping) -> Result<String> {
        self.format().dump(mapping)
    }
}

impl FromStr for Serializer {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Serializer::Yaml),
            "json" => Ok(Serializer::Json),
            _ => Err(ConfigError::UnknownSerializer(s.to_string())),
        }
    }
}

impl fmt::Display for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format().name())
    }
}

/// Shared top-level handling: blank or null means empty, anything but a
/// mapping is rejected.
fn into_mapping(format: &'static str, value: Value) -> Result<Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(SerializeError::NotAMapping {
            format,
            found: other.type_name(),
        }
        .into()),
    }
}
