//! Parsing raw timestamp columns into time points.

use chrono::{
    NaiveDate, NaiveDateTime, NaiveTime,
    format::{Item, ParseErrorKind, ParseResult, StrftimeItems},
};
use tracing::debug;

use crate::{
    Result,
    error::FrameError,
    frame::{Column, Frame},
    value::{Value, ValueKind},
};

/// Checks that `format` is a strftime specification the parser understands.
pub fn validate_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FrameError::InvalidTimeFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Parses one raw value with `format`.
///
/// Formats that carry no time-of-day fields yield midnight of the parsed date.
pub fn parse_time_point(raw: &str, format: &str) -> ParseResult<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, format) {
        Ok(t) => Ok(t),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            NaiveDate::parse_from_str(raw, format).map(|d| d.and_time(NaiveTime::MIN))
        }
        Err(e) => Err(e),
    }
}

/// Returns a frame whose `column` holds time points parsed with `format`.
///
/// The format is checked before any row is read. Cells that already hold time points are
/// kept as they are. The first cell that does not conform fails the whole call.
pub fn normalize_time(frame: &Frame, column: &str, format: &str) -> Result<Frame> {
    validate_format(format)?;
    let source = frame.column(column)?;

    let parsed = source
        .values()
        .iter()
        .enumerate()
        .map(|(row, value)| parse_cell(column, row, value, format))
        .collect::<Result<Vec<_>>>()?;

    let out = frame.clone().with_column(Column::new(column, parsed))?;
    debug!(column, format, rows = out.num_rows(), "normalized time column");
    Ok(out)
}

/// Converts a single cell to a `Time` value.
fn parse_cell(column: &str, row: usize, value: &Value, format: &str) -> Result<Value> {
    let raw = match value {
        Value::Time(_) => return Ok(value.clone()),
        Value::Text(raw) => raw,
        Value::Null => {
            return Err(FrameError::TimeParse {
                column: column.to_string(),
                row,
                value: String::new(),
                format: format.to_string(),
                reason: "empty cell".to_string(),
            });
        }
        other => {
            return Err(FrameError::ColumnKind {
                column: column.to_string(),
                row,
                expected: ValueKind::Text,
                found: other.kind(),
            });
        }
    };

    parse_time_point(raw, format)
        .map(Value::Time)
        .map_err(|e| FrameError::TimeParse {
            column: column.to_string(),
            row,
            value: raw.clone(),
            format: format.to_string(),
            reason: e.to_string(),
        })
}
