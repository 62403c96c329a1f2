//! Path resolution for resource files named in config.
//!
//! Resolves relative and tilde-prefixed paths against the config file that named them.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a resource path named in a config file.
///
/// - Tilde paths (`~/dicts/loan.txt`) expand to the home directory
/// - Relative paths resolve against `config_dir`
/// - Absolute paths are returned unchanged
///
/// The file is not required to exist; `Config::validate` reports missing resources.
pub fn resolve_resource_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_resolve_relative_path() {
        let test_dir = TestDir::new();
        let resolved = resolve_resource_path("dicts/loan.txt", test_dir.path()).unwrap();
        assert_eq!(resolved, test_dir.path().join("dicts/loan.txt"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let test_dir = TestDir::new();
        let config_dir = test_dir.create_dir("project");
        let resolved = resolve_resource_path("../shared.txt", &config_dir).unwrap();
        assert_eq!(resolved, config_dir.join("../shared.txt"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let test_dir = TestDir::new();
        let file = test_dir.create_file("loan.txt");
        let resolved = resolve_resource_path(file.to_str().unwrap(), Path::new("/elsewhere"))
            .unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_resolve_tilde_path() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let resolved = resolve_resource_path("~/loan.txt", Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved, dirs.home_dir().join("loan.txt"));
    }

    #[test]
    fn test_resolve_missing_file_is_not_an_error() {
        let test_dir = TestDir::new();
        assert!(resolve_resource_path("nope.txt", test_dir.path()).is_ok());
    }
}
