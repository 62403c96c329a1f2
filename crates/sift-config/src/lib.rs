//! Configuration system for sift.
//!
//! sift uses TOML configuration files named `.sift.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.sift.toml` files
//! found, then loading `~/.sift.toml` as the global config with lowest precedence. Every field
//! has a default, so a missing configuration is never an error.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawEntitySettings, RawKeywordSettings, RawNormalizeSettings, RawReportSettings,
    RawTextSettings, RawTimeSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_resource_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.sift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Timestamp column settings.
    pub time: TimeSettings,
    /// Text column settings.
    pub text: TextSettings,
    /// Count report settings.
    pub report: ReportSettings,
    /// URL entity settings.
    pub entity: EntitySettings,
    /// Text normalization settings.
    pub normalize: NormalizeSettings,
    /// Default keyword filter.
    pub keywords: KeywordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// 1. Discovers all `.sift.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.sift.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Checks the settings that are only interpreted later (tokens, formats, files) and
    /// returns a warning for each one that would fail when used.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.sift.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            time: &self.time,
            text: &self.text,
            report: &self.report,
            entity: &self.entity,
            normalize: &self.normalize,
            keywords: &self.keywords,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Timestamp column settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeSettings {
    /// Name of the timestamp column.
    pub column: String,
    /// strftime format of the raw timestamps.
    pub format: String,
    /// Default bucket width token (`d`, `w`, `m`, `y`).
    pub period: String,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            column: String::from("date"),
            format: String::from("%y.%m.%d."),
            period: String::from("m"),
        }
    }
}

/// Text column settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TextSettings {
    /// Name of the free-text column.
    pub column: String,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            column: String::from("text"),
        }
    }
}

/// Count report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Rows per block in top-N reports.
    pub top_n: usize,
    /// Whether category counts carry a percentage column.
    pub percentage: bool,
    /// Category sort token (`ascending`, `descending`, `none`).
    pub sort: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            percentage: false,
            sort: String::from("descending"),
        }
    }
}

/// URL entity settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EntitySettings {
    /// Substring the URL domain must contain.
    pub marker: String,
    /// Name of the derived identifier column.
    pub column: String,
    /// Column selecting the rows to extract from.
    pub filter_column: String,
    /// Value `filter_column` must equal.
    pub filter_value: String,
    /// Column holding the URLs.
    pub url_column: String,
}

impl Default for EntitySettings {
    fn default() -> Self {
        Self {
            marker: String::from(sift_frame::DEFAULT_SITE_MARKER),
            column: String::from(sift_frame::DEFAULT_ENTITY_COLUMN),
            filter_column: String::from("채널2"),
            filter_value: String::from("카페"),
            url_column: String::from("URL1"),
        }
    }
}

/// Text normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizeSettings {
    /// Loanword table, resolved against the directory of the config that set it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loanwords: Option<PathBuf>,
    /// Copies kept of a collapsed character run.
    pub repeats: usize,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            loanwords: None,
            repeats: 2,
        }
    }
}

/// Default keyword filter applied when a command is given no keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Combinator joining multiple keywords (`and` or `or`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<String>,
    /// Keywords rows must contain.
    pub include: Vec<String>,
    /// Keywords rows must not contain.
    pub exclude: Vec<String>,
}

/// Borrowed view of the settings sections for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Timestamp column settings.
    time: &'a TimeSettings,
    /// Text column settings.
    text: &'a TextSettings,
    /// Count report settings.
    report: &'a ReportSettings,
    /// URL entity settings.
    entity: &'a EntitySettings,
    /// Text normalization settings.
    normalize: &'a NormalizeSettings,
    /// Default keyword filter.
    keywords: &'a KeywordSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_settings_defaults() {
        let time = TimeSettings::default();
        assert_eq!(time.column, "date");
        assert_eq!(time.format, "%y.%m.%d.");
        assert_eq!(time.period, "m");
    }

    #[test]
    fn test_report_settings_defaults() {
        let report = ReportSettings::default();
        assert_eq!(report.top_n, 10);
        assert!(!report.percentage);
        assert_eq!(report.sort, "descending");
    }

    #[test]
    fn test_entity_settings_defaults() {
        let entity = EntitySettings::default();
        assert_eq!(entity.marker, "cafe");
        assert_eq!(entity.column, "entity");
        assert_eq!(entity.url_column, "URL1");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.keywords.include.is_empty());
        assert!(config.normalize.loanwords.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::default();
        let toml = config.settings_to_toml();

        assert!(toml.contains("[time]"));
        assert!(toml.contains("[report]"));
        assert!(toml.contains("[entity]"));
        assert!(toml.contains("[keywords]"));
        assert!(toml.contains("top_n = 10"));
        assert!(toml.contains("marker = \"cafe\""));
        assert!(!toml.contains("loanwords"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("time").is_some());
        assert!(parsed.get("normalize").is_some());
    }

    #[test]
    fn test_settings_to_toml_parses_back() {
        let mut config = Config::default();
        config.keywords.include = vec!["love".into(), "cafes".into()];
        config.keywords.logic = Some("and".into());
        let raw = parse_config_str(&config.settings_to_toml(), Path::new("out.toml")).unwrap();
        let keywords = raw.keywords.unwrap();
        assert_eq!(keywords.include, Some(vec!["love".to_string(), "cafes".to_string()]));
        assert_eq!(keywords.logic, Some("and".to_string()));
    }
}
