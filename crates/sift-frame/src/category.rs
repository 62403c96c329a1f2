//! Counting records per distinct column value.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, count::CountTable, error::FrameError, frame::Frame, value::Value};

/// Ordering applied to category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest count first.
    Ascending,
    /// Largest count first.
    #[default]
    Descending,
    /// First-seen order.
    None,
}

impl FromStr for SortOrder {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            "none" => Ok(Self::None),
            _ => Err(FrameError::UnknownSortOrder {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Hashable identity of a non-empty cell.
#[derive(PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    /// Text cell.
    Text(&'a str),
    /// Time point cell.
    Time(NaiveDateTime),
    /// Count cell.
    Count(u64),
    /// Fractional cell, compared by bit pattern.
    Float(u64),
}

impl<'a> GroupKey<'a> {
    /// Returns the key for `value`, or `None` for an empty cell.
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Text(s) => Some(Self::Text(s)),
            Value::Time(t) => Some(Self::Time(*t)),
            Value::Count(n) => Some(Self::Count(*n)),
            Value::Float(x) => Some(Self::Float(x.to_bits())),
        }
    }
}

/// Counts records per distinct value of `column`.
///
/// Groups start in first-seen order. Sorting is stable, so groups with equal counts keep
/// that order. Percentages, when requested, are shares of the total across all groups.
/// Empty cells are not counted.
pub fn count_by_category(
    frame: &Frame,
    column: &str,
    sort: SortOrder,
    with_percentage: bool,
) -> Result<CountTable<Value>> {
    let values = frame.column(column)?.values();

    let mut index: HashMap<GroupKey<'_>, usize> = HashMap::new();
    let mut groups: Vec<(Value, u64)> = Vec::new();
    for value in values {
        let Some(key) = GroupKey::of(value) else {
            continue;
        };
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((value.clone(), 0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
    }

    match sort {
        SortOrder::Ascending => groups.sort_by_key(|&(_, n)| n),
        SortOrder::Descending => groups.sort_by(|a, b| b.1.cmp(&a.1)),
        SortOrder::None => {}
    }

    let mut table = CountTable::new(column, groups);
    if with_percentage {
        table = table.with_percentages();
    }

    debug!(
        column,
        %sort,
        records = frame.num_rows(),
        groups = table.len(),
        "category count done"
    );
    Ok(table)
}
