//! Cell values.

use std::{borrow::Cow, fmt};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Display format for time points.
const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An empty cell, produced only when report blocks are padded to a common height.
    Null,
    /// Free text or a category label.
    Text(String),
    /// A parsed time point.
    Time(NaiveDateTime),
    /// A non-negative record count.
    Count(u64),
    /// A fractional number such as a percentage.
    Float(f64),
}

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Empty cell.
    Null,
    /// Text cell.
    Text,
    /// Time point cell.
    Time,
    /// Count cell.
    Count,
    /// Fractional cell.
    Float,
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
            Self::Time(_) => ValueKind::Time,
            Self::Count(_) => ValueKind::Count,
            Self::Float(_) => ValueKind::Float,
        }
    }

    /// Returns true for an empty cell.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text of a `Text` cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the time point of a `Time` cell.
    pub fn as_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the count of a `Count` cell.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// Renders the cell as text for substring tests and output.
    ///
    /// Text is borrowed; other kinds are formatted. An empty cell renders as "".
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Time(t) => write!(f, "{}", t.format(TIME_DISPLAY_FORMAT)),
            Self::Count(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "empty",
            Self::Text => "text",
            Self::Time => "time",
            Self::Count => "count",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Self::Time(t)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Count(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn render_borrows_text() {
        let value = Value::from("cafe");
        assert!(matches!(value.render(), Cow::Borrowed("cafe")));
        assert_eq!(Value::Null.render(), "");
    }

    #[test]
    fn display_formats_each_kind() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(Value::Time(time).to_string(), "2024-01-05 09:30:00");
        assert_eq!(Value::Count(3).to_string(), "3");
        assert_eq!(Value::Float(33.3333).to_string(), "33.3333");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![Value::Null, Value::from("A"), Value::Count(2), Value::Float(0.5)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,"A",2,0.5]"#);
    }
}
