//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// `[time]` section.
    pub time: Option<RawTimeSettings>,
    /// `[text]` section.
    pub text: Option<RawTextSettings>,
    /// `[report]` section.
    pub report: Option<RawReportSettings>,
    /// `[entity]` section.
    pub entity: Option<RawEntitySettings>,
    /// `[normalize]` section.
    pub normalize: Option<RawNormalizeSettings>,
    /// `[keywords]` section.
    pub keywords: Option<RawKeywordSettings>,
}

/// Raw timestamp settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTimeSettings {
    /// Timestamp column.
    pub column: Option<String>,
    /// strftime format.
    pub format: Option<String>,
    /// Bucket width token.
    pub period: Option<String>,
}

/// Raw text settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTextSettings {
    /// Free-text column.
    pub column: Option<String>,
}

/// Raw report settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReportSettings {
    /// Rows per top-N block.
    pub top_n: Option<usize>,
    /// Percentage column toggle.
    pub percentage: Option<bool>,
    /// Category sort token.
    pub sort: Option<String>,
}

/// Raw entity settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEntitySettings {
    /// Domain marker substring.
    pub marker: Option<String>,
    /// Derived identifier column.
    pub column: Option<String>,
    /// Row selection column.
    pub filter_column: Option<String>,
    /// Row selection value.
    pub filter_value: Option<String>,
    /// URL column.
    pub url_column: Option<String>,
}

/// Raw normalization settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNormalizeSettings {
    /// Loanword table path, relative to the config file's directory.
    pub loanwords: Option<String>,
    /// Copies kept of a collapsed run.
    pub repeats: Option<usize>,
}

/// Raw default keyword filter.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKeywordSettings {
    /// Combinator token.
    pub logic: Option<String>,
    /// Included keywords; a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Excluded keywords; a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
