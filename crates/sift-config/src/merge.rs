//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving resource paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Config, ConfigError, EntitySettings, KeywordSettings, NormalizeSettings, ReportSettings,
    TextSettings, TimeSettings,
    parse::{
        RawConfig, RawEntitySettings, RawKeywordSettings, RawNormalizeSettings,
        RawReportSettings, RawTextSettings, RawTimeSettings,
    },
    resolve::resolve_resource_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Returns the directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Keyword lists: the list from the highest-precedence file that sets it wins whole
/// - Loanword paths resolve against the directory of the file that set them
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut config = Config::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref time) = raw.time {
            apply_raw_time(&mut config.time, time);
        }
        if let Some(ref text) = raw.text {
            apply_raw_text(&mut config.text, text);
        }
        if let Some(ref report) = raw.report {
            apply_raw_report(&mut config.report, report);
        }
        if let Some(ref entity) = raw.entity {
            apply_raw_entity(&mut config.entity, entity);
        }
        if let Some(ref normalize) = raw.normalize {
            apply_raw_normalize(&mut config.normalize, normalize, parsed.dir())?;
        }
        if let Some(ref keywords) = raw.keywords {
            apply_raw_keywords(&mut config.keywords, keywords);
        }
    }

    config.config_root = configs.first().map(|c| c.dir().to_path_buf());
    debug!(files = configs.len(), "merged config files");
    Ok(config)
}

/// Applies raw time settings, overwriting any present values.
fn apply_raw_time(result: &mut TimeSettings, raw: &RawTimeSettings) {
    if let Some(ref v) = raw.column {
        result.column.clone_from(v);
    }
    if let Some(ref v) = raw.format {
        result.format.clone_from(v);
    }
    if let Some(ref v) = raw.period {
        result.period.clone_from(v);
    }
}

/// Applies raw text settings.
fn apply_raw_text(result: &mut TextSettings, raw: &RawTextSettings) {
    if let Some(ref v) = raw.column {
        result.column.clone_from(v);
    }
}

/// Applies raw report settings.
fn apply_raw_report(result: &mut ReportSettings, raw: &RawReportSettings) {
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
    if let Some(v) = raw.percentage {
        result.percentage = v;
    }
    if let Some(ref v) = raw.sort {
        result.sort.clone_from(v);
    }
}

/// Applies raw entity settings.
fn apply_raw_entity(result: &mut EntitySettings, raw: &RawEntitySettings) {
    if let Some(ref v) = raw.marker {
        result.marker.clone_from(v);
    }
    if let Some(ref v) = raw.column {
        result.column.clone_from(v);
    }
    if let Some(ref v) = raw.filter_column {
        result.filter_column.clone_from(v);
    }
    if let Some(ref v) = raw.filter_value {
        result.filter_value.clone_from(v);
    }
    if let Some(ref v) = raw.url_column {
        result.url_column.clone_from(v);
    }
}

/// Applies raw normalization settings, resolving the loanword path against `config_dir`.
fn apply_raw_normalize(
    result: &mut NormalizeSettings,
    raw: &RawNormalizeSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.loanwords {
        result.loanwords = Some(resolve_resource_path(v, config_dir)?);
    }
    if let Some(v) = raw.repeats {
        result.repeats = v;
    }
    Ok(())
}

/// Applies a raw keyword filter.
fn apply_raw_keywords(result: &mut KeywordSettings, raw: &RawKeywordSettings) {
    if let Some(ref v) = raw.logic {
        result.logic = Some(v.clone());
    }
    if let Some(ref v) = raw.include {
        result.include.clone_from(v);
    }
    if let Some(ref v) = raw.exclude {
        result.exclude.clone_from(v);
    }
}
