//! Settings loaded from TOML.
//!
//! - Default values are embedded via `include_str!("default_settings.toml")`
//! - `parse_settings_toml(toml_content)` parses and validates custom settings
//! - `Settings::load(path)` reads a settings file from disk
//!
//! Settings are plain values handed to whoever needs them; there is no global
//! instance.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub query: QuerySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub path: PathBuf,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    /// Caller-side cap on printed results; `0` means unlimited.
    #[serde(default)]
    pub limit: usize,
    pub max_digits: usize,
}

impl Settings {
    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        parse_settings_toml(&content)
    }

    /// The embedded defaults.
    pub fn defaults() -> Result<Self, SettingsError> {
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.dictionary.path.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.query.max_digits == 0 {
        return Err(SettingsError::InvalidValue {
            field: "query.max_digits".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
