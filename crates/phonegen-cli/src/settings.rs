use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults read from a TOML settings file. Flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub total_length: Option<i64>,
    pub country_code: Option<String>,
    pub local_code: Option<String>,
    pub count: Option<u64>,
    pub output: Option<PathBuf>,
    pub include_separator: Option<bool>,
    pub unique: Option<bool>,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Toml {
        path: path.to_path_buf(),
        source,
    })
}
