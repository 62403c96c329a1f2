//! Locating the `.sift.toml` files that apply to a directory.
//!
//! A data directory inherits settings from every ancestor that holds a `.sift.toml`, then
//! from `~/.sift.toml`. A file with `root = true` closes the chain.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// Name of a sift configuration file.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Lists the configuration files that apply to `cwd`, most specific first.
///
/// Ancestors of `cwd` are searched upward. A file with `root = true` ends the search and
/// also excludes the global file, which otherwise comes last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let closes_chain = is_root_config(&candidate);
        debug!(path = %candidate.display(), root = closes_chain, "found config");
        configs.push(candidate);
        if closes_chain {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file())
        && !configs.contains(&global)
    {
        debug!(path = %global.display(), "found global config");
        configs.push(global);
    }
    configs
}

/// Returns `~/.sift.toml`, or `None` when no home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is `~/.sift.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn test_discover_single_config() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config_at_root();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert_eq!(local(&configs), vec![&config]);
    }

    #[test]
    fn test_discover_closest_first() {
        let test_dir = TestDir::new();
        let outer = test_dir.create_config_at_root();
        let inner = test_dir.create_config("a/b");
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert_eq!(local(&configs), vec![&inner, &outer]);
    }

    #[test]
    fn test_discover_stops_at_root_config() {
        let test_dir = TestDir::new();
        test_dir.create_config_at_root();
        let root = test_dir.create_root_config("project");
        let subdir = test_dir.create_dir("project/data");

        let configs = discover_config_files(&subdir);
        assert_eq!(configs, vec![root]);
    }

    #[test]
    fn test_discover_from_config_directory_itself() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config("reports");

        let configs = discover_config_files(&test_dir.path().join("reports"));
        assert_eq!(local(&configs), vec![&config]);
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let test_dir = TestDir::new();
        test_dir.create_dir(CONFIG_FILENAME);

        let configs = discover_config_files(test_dir.path());
        assert!(local(&configs).is_empty());
    }
}
