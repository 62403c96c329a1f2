//! Named columns and the frames built from them.

use serde::Serialize;

use crate::{
    Result,
    error::FrameError,
    value::{Value, ValueKind},
};

/// A named, ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name.
    name: String,
    /// Cell values, one per row.
    values: Vec<Value>,
}

impl Column {
    /// Creates a column from a name and values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates a text column from anything that converts into strings.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            values.into_iter().map(|s| Value::Text(s.into())).collect(),
        )
    }

    /// Creates a column of `Null` cells.
    pub fn nulls(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, vec![Value::Null; len])
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cell values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the column, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the cell at `row`.
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Returns the column resized to `len` rows, truncating or padding with `Null`.
    pub fn resized(mut self, len: usize) -> Self {
        self.values.resize(len, Value::Null);
        self
    }

    /// Fails unless every cell has the expected kind.
    pub fn expect_kind(&self, expected: ValueKind) -> Result<()> {
        match self
            .values
            .iter()
            .enumerate()
            .find(|(_, v)| v.kind() != expected)
        {
            Some((row, value)) => Err(FrameError::ColumnKind {
                column: self.name.clone(),
                row,
                expected,
                found: value.kind(),
            }),
            None => Ok(()),
        }
    }
}

/// An ordered set of equally long columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    /// Columns in display order.
    columns: Vec<Column>,
    /// Row count shared by every column.
    #[serde(skip)]
    rows: usize,
}

impl Frame {
    /// Creates a frame, checking that all columns have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            return Err(FrameError::LengthMismatch {
                column: bad.name.clone(),
                expected: rows,
                found: bad.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Looks up a column by name. Duplicate names resolve to the first match.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FrameError::missing_column(name))
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the cells of one row across every column.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        (index < self.rows).then(|| self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Builds a frame holding the given rows, in the given order.
    ///
    /// Indices must be in range; callers derive them from this frame.
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: indices.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();
        Self {
            columns,
            rows: indices.len(),
        }
    }

    /// Returns a frame with `column` replacing the same-named column, or appended if new.
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(FrameError::LengthMismatch {
                column: column.name,
                expected: self.rows,
                found: column.values.len(),
            });
        }
        self.rows = column.len();
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(slot) => *slot = column,
            None => self.columns.push(column),
        }
        Ok(self)
    }

    /// Places frames side by side, padding shorter ones with `Null` to the tallest height.
    pub fn hconcat(frames: Vec<Self>) -> Self {
        let rows = frames.iter().map(|f| f.rows).max().unwrap_or(0);
        let columns = frames
            .into_iter()
            .flat_map(|f| f.columns)
            .map(|c| c.resized(rows))
            .collect();
        Self { columns, rows }
    }

    /// Returns the frame truncated or padded with `Null` to exactly `rows` rows.
    pub fn resized(self, rows: usize) -> Self {
        let columns = self.columns.into_iter().map(|c| c.resized(rows)).collect();
        Self { columns, rows }
    }
}

impl From<Column> for Frame {
    fn from(column: Column) -> Self {
        Self {
            rows: column.len(),
            columns: vec![column],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new(vec![
            Column::text("content", ["I love cafes", "hello", "cafes love me"]),
            Column::text("channel", ["A", "B", "A"]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = Frame::new(vec![
            Column::text("a", ["1", "2"]),
            Column::text("b", ["1"]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            FrameError::LengthMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn missing_column_is_schema_error() {
        let err = sample().column("date").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Schema);
        assert_eq!(err.to_string(), "no column named 'date'");
    }

    #[test]
    fn take_rows_keeps_order() {
        let taken = sample().take_rows(&[2, 0]);
        assert_eq!(taken.num_rows(), 2);
        assert_eq!(
            taken.column("content").unwrap().values(),
            &[Value::from("cafes love me"), Value::from("I love cafes")]
        );
    }

    #[test]
    fn with_column_replaces_by_name() {
        let frame = sample()
            .with_column(Column::text("channel", ["x", "y", "z"]))
            .unwrap();
        assert_eq!(frame.num_columns(), 2);
        assert_eq!(frame.column("channel").unwrap().get(1), Some(&Value::from("y")));
    }

    #[test]
    fn hconcat_pads_with_nulls() {
        let tall = Frame::new(vec![Column::text("a", ["1", "2", "3"])]).unwrap();
        let short = Frame::new(vec![Column::text("b", ["x"])]).unwrap();
        let joined = Frame::hconcat(vec![tall, short]);
        assert_eq!(joined.num_rows(), 3);
        assert_eq!(
            joined.column("b").unwrap().values(),
            &[Value::from("x"), Value::Null, Value::Null]
        );
    }

    #[test]
    fn expect_kind_reports_first_offender() {
        let column = Column::new("date", vec![Value::from("2024-01-01"), Value::Count(1)]);
        let err = column.expect_kind(ValueKind::Text).unwrap_err();
        assert!(matches!(
            err,
            FrameError::ColumnKind { row: 1, found: ValueKind::Count, .. }
        ));
    }
}
