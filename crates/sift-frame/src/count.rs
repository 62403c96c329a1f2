//! Count tables produced by the aggregators.

use serde::Serialize;

use crate::{
    frame::{Column, Frame},
    value::Value,
};

/// Name of the count column in frames built from a [`CountTable`].
pub const COUNT_COLUMN: &str = "count";

/// Name of the percentage column in frames built from a [`CountTable`].
pub const PERCENTAGE_COLUMN: &str = "percentage";

/// One key and how many records fell under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountRow<K> {
    /// Group key.
    pub key: K,
    /// Number of records with this key.
    pub count: u64,
    /// Share of all counted records, in percent, rounded to 4 decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Ordered key/count pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountTable<K> {
    /// Display name of the key column.
    key_name: String,
    /// Rows in output order.
    rows: Vec<CountRow<K>>,
    /// Whether percentages were requested.
    #[serde(skip)]
    percentages: bool,
}

impl<K> CountTable<K> {
    /// Creates a table from key/count pairs, in the given order.
    pub fn new(key_name: impl Into<String>, counts: impl IntoIterator<Item = (K, u64)>) -> Self {
        Self {
            key_name: key_name.into(),
            rows: counts
                .into_iter()
                .map(|(key, count)| CountRow {
                    key,
                    count,
                    percentage: None,
                })
                .collect(),
            percentages: false,
        }
    }

    /// Returns the key column name.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Returns the rows in order.
    pub fn rows(&self) -> &[CountRow<K>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Keeps only the first `n` rows.
    pub fn head(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Reverses the row order.
    pub fn reversed(mut self) -> Self {
        self.rows.reverse();
        self
    }

    /// Fills in each row's share of the total count.
    ///
    /// Rows of a table whose total is zero are left without a share.
    pub fn with_percentages(mut self) -> Self {
        self.percentages = true;
        let total = self.total();
        if total > 0 {
            for row in &mut self.rows {
                row.percentage = Some(round4(row.count as f64 * 100.0 / total as f64));
            }
        }
        self
    }

    /// Returns true if percentages were computed for this table.
    pub fn has_percentages(&self) -> bool {
        self.percentages
    }
}

impl<K: Clone + Into<Value>> CountTable<K> {
    /// Converts the table to a frame with key, count and (if computed) percentage columns.
    pub fn to_frame(&self) -> Frame {
        let keys = self.rows.iter().map(|r| r.key.clone().into()).collect();
        let counts = self.rows.iter().map(|r| Value::Count(r.count)).collect();
        let mut columns = vec![
            Column::new(self.key_name.clone(), keys),
            Column::new(COUNT_COLUMN, counts),
        ];
        if self.has_percentages() {
            let shares = self
                .rows
                .iter()
                .map(|r| r.percentage.map_or(Value::Null, Value::Float))
                .collect();
            columns.push(Column::new(PERCENTAGE_COLUMN, shares));
        }
        Frame::hconcat(columns.into_iter().map(Frame::from).collect())
    }
}

/// Rounds to 4 decimal places, halves to even.
pub(crate) fn round4(x: f64) -> f64 {
    (x * 10_000.0).round_ties_even() / 10_000.0
}
