//! Noun frequency counting over a text column.

use std::{collections::HashMap, path::Path};

use sift_frame::{CountTable, Frame};
use tracing::debug;

use crate::error::TextError;

/// Key column name of a noun frequency table.
pub const TERMS_COLUMN: &str = "TERMS";

/// Count column name of a persisted noun frequency table.
pub const FREQUENCY_COLUMN: &str = "FREQUENCY";

/// A morphological analyzer able to pick the nouns out of a text.
pub trait NounAnalyzer {
    /// Returns the nouns of `text`, in order of appearance, repeats included.
    fn nouns(&self, text: &str) -> Vec<String>;
}

impl<F> NounAnalyzer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn nouns(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Counts noun occurrences across every document of `column`.
///
/// Nouns seen fewer than `min_count` times are dropped. The result is ordered by descending
/// frequency; equal frequencies keep first-seen order.
pub fn noun_frequencies(
    frame: &Frame,
    column: &str,
    analyzer: &dyn NounAnalyzer,
    min_count: u64,
) -> Result<CountTable<String>, TextError> {
    let docs = frame.column(column)?.values();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for doc in docs.iter().filter(|v| !v.is_null()) {
        for noun in analyzer.nouns(&doc.render()) {
            match index.get(&noun) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(noun.clone(), counts.len());
                    counts.push((noun, 1));
                }
            }
        }
    }

    counts.retain(|&(_, n)| n >= min_count);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        column,
        documents = docs.len(),
        terms = counts.len(),
        min_count,
        "noun frequencies done"
    );
    Ok(CountTable::new(TERMS_COLUMN, counts))
}

/// Writes a frequency table as CSV with a `TERMS,FREQUENCY` header.
pub fn write_frequencies(table: &CountTable<String>, path: &Path) -> Result<(), TextError> {
    let csv_err = |source| TextError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record([TERMS_COLUMN, FREQUENCY_COLUMN])
        .map_err(csv_err)?;
    for row in table.rows() {
        let count = row.count.to_string();
        wtr.write_record([row.key.as_str(), count.as_str()])
            .map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| csv_err(e.into()))?;
    debug!(path = %path.display(), terms = table.len(), "wrote noun frequencies");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sift_frame::{Column, Value};

    use super::*;

    /// Treats every whitespace-separated word of two or more characters as a noun.
    fn words(text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .map(str::to_string)
            .collect()
    }

    fn docs() -> Frame {
        Frame::new(vec![Column::new(
            "text",
            vec![
                Value::from("cafe latte cafe"),
                Value::from("latte art"),
                Value::Null,
                Value::from("cafe a"),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn counts_every_occurrence() {
        let table = noun_frequencies(&docs(), "text", &words, 1).unwrap();
        let rows: Vec<_> = table.rows().iter().map(|r| (r.key.as_str(), r.count)).collect();
        assert_eq!(rows, vec![("cafe", 3), ("latte", 2), ("art", 1)]);
        assert_eq!(table.key_name(), TERMS_COLUMN);
    }

    #[test]
    fn min_count_filters() {
        let table = noun_frequencies(&docs(), "text", &words, 2).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_column() {
        let err = noun_frequencies(&docs(), "body", &words, 1).unwrap_err();
        assert!(matches!(err, TextError::Frame(_)));
    }

    #[test]
    fn writes_terms_and_frequency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nouns.csv");
        let table = noun_frequencies(&docs(), "text", &words, 2).unwrap();
        write_frequencies(&table, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "TERMS,FREQUENCY\ncafe,3\nlatte,2\n"
        );
    }
}
