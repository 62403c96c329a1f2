//! Errors raised while loading `.sift.toml` files.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use toml::de;

/// Why a configuration could not be loaded.
///
/// Unknown tokens and missing resources are not errors here; they are reported as
/// [`ConfigWarning`](crate::ConfigWarning)s by [`Config::validate`](crate::Config::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered config file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// The config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A config file is not valid TOML or has a mistyped field.
    #[error("invalid config {path}: {source}")]
    ParseToml {
        /// The config file.
        path: PathBuf,
        /// Parser error, including line and column.
        source: de::Error,
    },

    /// A `~/` resource path was used but no home directory is known.
    #[error("cannot expand '~': no home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Returns the config file the error refers to, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadFile { path, .. } | Self::ParseToml { path, .. } => Some(path),
            Self::NoHomeDirectory => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = ConfigError::ReadFile {
            path: PathBuf::from("/p/.sift.toml"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("cannot read /p/.sift.toml"));
        assert_eq!(err.path(), Some(Path::new("/p/.sift.toml")));
        assert!(ConfigError::NoHomeDirectory.path().is_none());
    }
}
