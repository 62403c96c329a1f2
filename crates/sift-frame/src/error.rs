//! Error types for frame operations.

use std::fmt;

use sift_query::QueryError;
use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by frame operations.
///
/// Every operation validates its whole input before producing output, so an error always
/// means no result was produced.
#[derive(Debug, Error)]
pub enum FrameError {
    /// A referenced column does not exist.
    #[error("no column named '{column}'")]
    MissingColumn {
        /// The missing column name.
        column: String,
    },

    /// A column holds values of the wrong kind for the operation.
    #[error("column '{column}' row {row}: expected {expected} value, found {found}")]
    ColumnKind {
        /// Column name.
        column: String,
        /// First offending row.
        row: usize,
        /// Kind the operation requires.
        expected: ValueKind,
        /// Kind actually found.
        found: ValueKind,
    },

    /// Columns of one frame have different lengths.
    #[error("column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        /// Column name.
        column: String,
        /// Row count of the frame.
        expected: usize,
        /// Row count of the column.
        found: usize,
    },

    /// A derived column would overwrite an existing one.
    #[error("column '{column}' already exists")]
    DuplicateColumn {
        /// The colliding column name.
        column: String,
    },

    /// A keyword list or expression is invalid.
    #[error(transparent)]
    Keyword(#[from] QueryError),

    /// A period token is not one of the recognized buckets.
    #[error("unknown period '{token}' (expected one of d, w, m, y)")]
    UnknownPeriod {
        /// The rejected token.
        token: String,
    },

    /// A sort token is not recognized.
    #[error("unknown sort order '{token}' (expected ascending, descending or none)")]
    UnknownSortOrder {
        /// The rejected token.
        token: String,
    },

    /// A time format specification cannot be used by the parser.
    #[error("invalid time format '{format}'")]
    InvalidTimeFormat {
        /// The rejected format.
        format: String,
    },

    /// A value does not conform to the declared time format.
    #[error("column '{column}' row {row}: '{value}' does not match format '{format}': {reason}")]
    TimeParse {
        /// Column name.
        column: String,
        /// Offending row.
        row: usize,
        /// Offending raw value.
        value: String,
        /// Format the value was parsed with.
        format: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A URL does not belong to the required site family.
    #[error("column '{column}' row {row}: '{url}' is not a '{marker}' URL")]
    UrlDomain {
        /// Column name.
        column: String,
        /// Offending row.
        row: usize,
        /// Offending URL.
        url: String,
        /// Site family marker the domain must contain.
        marker: String,
    },

    /// Failed to read delimited input.
    #[error("failed to read {origin}: {source}")]
    ReadCsv {
        /// File path or reader description.
        origin: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Failed to write delimited output.
    #[error("failed to write {origin}: {source}")]
    WriteCsv {
        /// File path or writer description.
        origin: String,
        /// Underlying CSV error.
        source: csv::Error,
    },
}

/// Broad classification of a [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced column is absent or has the wrong shape.
    Schema,
    /// A combinator, period, sort or format setting is invalid.
    Config,
    /// A value does not conform to a declared time format.
    Parse,
    /// A value violates a required structural pattern.
    Validation,
    /// Reading or writing external data failed.
    Io,
}

impl FrameError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumn { .. }
            | Self::ColumnKind { .. }
            | Self::LengthMismatch { .. }
            | Self::DuplicateColumn { .. } => ErrorKind::Schema,
            Self::Keyword(_)
            | Self::UnknownPeriod { .. }
            | Self::UnknownSortOrder { .. }
            | Self::InvalidTimeFormat { .. } => ErrorKind::Config,
            Self::TimeParse { .. } => ErrorKind::Parse,
            Self::UrlDomain { .. } => ErrorKind::Validation,
            Self::ReadCsv { .. } | Self::WriteCsv { .. } => ErrorKind::Io,
        }
    }

    /// Creates a `MissingColumn` error.
    pub(crate) fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Schema => "schema error",
            Self::Config => "config error",
            Self::Parse => "parse error",
            Self::Validation => "validation error",
            Self::Io => "I/O error",
        };
        f.write_str(name)
    }
}
