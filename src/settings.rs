use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_true() -> bool {
    true
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Options for turning a URL into a [`QueryMap`](crate::QueryMap)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSettings {
    /// Decode `+` as a space before percent-decoding
    #[serde(default)]
    pub form_encoded: bool,

    /// Drop zero-length `&` segments instead of storing them under `""`
    #[serde(default = "default_true")]
    pub skip_empty_pairs: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        ParseSettings {
            form_encoded: false,
            skip_empty_pairs: true,
        }
    }
}

/// Options for turning a [`QueryMap`](crate::QueryMap) into a query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringifySettings {
    /// Encode a space as `+` instead of `%20`
    #[serde(default)]
    pub form_encoded: bool,
}

/// Settings for both directions, as read from a TOML file
///
/// ```toml
/// [parse]
/// form_encoded = true
/// skip_empty_pairs = false
///
/// [stringify]
/// form_encoded = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub parse: ParseSettings,
    #[serde(default)]
    pub stringify: StringifySettings,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}
