//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that would fail once
//! a command interprets them.

use std::fmt;

use sift_frame::{Combinator, Period, SortOrder, validate_format};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `time.period` is not a known bucket width.
    UnknownPeriod {
        /// The offending token.
        value: String,
    },
    /// `report.sort` is not a known sort order.
    UnknownSort {
        /// The offending token.
        value: String,
    },
    /// `time.format` contains an invalid strftime directive.
    InvalidTimeFormat {
        /// The offending format.
        format: String,
    },
    /// `keywords.logic` is not a known combinator.
    UnknownLogic {
        /// The offending token.
        value: String,
    },
    /// `normalize.loanwords` names a file that does not exist.
    LoanwordFileMissing {
        /// Resolved path of the table.
        path: String,
    },
    /// `report.top_n` is zero, so every top-N block would be empty.
    EmptyTopN,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPeriod { value } => {
                write!(f, "time.period '{value}' is not one of d, w, m, y")
            }
            Self::UnknownSort { value } => {
                write!(
                    f,
                    "report.sort '{value}' is not one of ascending, descending, none"
                )
            }
            Self::InvalidTimeFormat { format } => {
                write!(f, "time.format '{format}' is not a valid strftime format")
            }
            Self::UnknownLogic { value } => {
                write!(f, "keywords.logic '{value}' is not one of and, or")
            }
            Self::LoanwordFileMissing { path } => {
                write!(f, "loanword table does not exist: {path}")
            }
            Self::EmptyTopN => write!(f, "report.top_n is 0; top-N reports will be empty"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.time.period.parse::<Period>().is_err() {
        warnings.push(ConfigWarning::UnknownPeriod {
            value: config.time.period.clone(),
        });
    }
    if validate_format(&config.time.format).is_err() {
        warnings.push(ConfigWarning::InvalidTimeFormat {
            format: config.time.format.clone(),
        });
    }
    if config.report.sort.parse::<SortOrder>().is_err() {
        warnings.push(ConfigWarning::UnknownSort {
            value: config.report.sort.clone(),
        });
    }
    if config.report.top_n == 0 {
        warnings.push(ConfigWarning::EmptyTopN);
    }
    if let Some(ref logic) = config.keywords.logic
        && logic.parse::<Combinator>().is_err()
    {
        warnings.push(ConfigWarning::UnknownLogic {
            value: logic.clone(),
        });
    }
    if let Some(ref path) = config.normalize.loanwords
        && !path.is_file()
    {
        warnings.push(ConfigWarning::LoanwordFileMissing {
            path: path.display().to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_default_config_is_clean() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_bad_tokens_warn() {
        let mut config = Config::default();
        config.time.period = "fortnight".into();
        config.report.sort = "random".into();
        config.keywords.logic = Some("xor".into());

        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::UnknownPeriod {
                    value: "fortnight".into()
                },
                ConfigWarning::UnknownSort {
                    value: "random".into()
                },
                ConfigWarning::UnknownLogic {
                    value: "xor".into()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_time_format_warns() {
        let mut config = Config::default();
        config.time.format = "%Y-%Q".into();
        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::InvalidTimeFormat { .. }]
        ));
    }

    #[test]
    fn test_zero_top_n_warns() {
        let mut config = Config::default();
        config.report.top_n = 0;
        assert_eq!(validate_config(&config), vec![ConfigWarning::EmptyTopN]);
    }

    #[test]
    fn test_loanword_file_checked() {
        let test_dir = TestDir::new();
        let mut config = Config::default();

        config.normalize.loanwords = Some(test_dir.path().join("missing.txt"));
        assert!(matches!(
            validate_config(&config).as_slice(),
            [ConfigWarning::LoanwordFileMissing { .. }]
        ));

        config.normalize.loanwords = Some(test_dir.create_file("loan.txt"));
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::UnknownPeriod { value: "q".into() };
        assert_eq!(warning.to_string(), "time.period 'q' is not one of d, w, m, y");
    }
}
