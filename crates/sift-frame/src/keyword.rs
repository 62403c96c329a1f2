//! Row filters by keyword membership.

use sift_query::{KeywordExpr, Polarity};
use tracing::debug;

use crate::{Result, frame::Frame};

/// Keeps the rows whose `column` value satisfies `expr` under `polarity`.
///
/// Row order and every column are preserved. Empty cells read as the empty string.
pub fn filter(frame: &Frame, column: &str, expr: &KeywordExpr, polarity: Polarity) -> Result<Frame> {
    let values = frame.column(column)?.values();
    let keep: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| expr.matches(&v.render(), polarity))
        .map(|(i, _)| i)
        .collect();

    let out = frame.take_rows(&keep);
    debug!(
        column,
        ?polarity,
        rows_in = frame.num_rows(),
        rows_out = out.num_rows(),
        "keyword filter done"
    );
    Ok(out)
}

/// Keeps the rows whose `column` value satisfies `expr`.
pub fn filter_include(frame: &Frame, column: &str, expr: &KeywordExpr) -> Result<Frame> {
    filter(frame, column, expr, Polarity::Include)
}

/// Keeps the rows whose `column` value satisfies `expr` with every keyword test negated.
pub fn filter_exclude(frame: &Frame, column: &str, expr: &KeywordExpr) -> Result<Frame> {
    filter(frame, column, expr, Polarity::Exclude)
}

/// Keeps the rows whose `column` value renders exactly as `value`.
pub fn filter_equals(frame: &Frame, column: &str, value: &str) -> Result<Frame> {
    let keep: Vec<usize> = frame
        .column(column)?
        .values()
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_null() && v.render() == value)
        .map(|(i, _)| i)
        .collect();

    let out = frame.take_rows(&keep);
    debug!(
        column,
        value,
        rows_in = frame.num_rows(),
        rows_out = out.num_rows(),
        "equality filter done"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, ErrorKind, Value};

    fn posts() -> Frame {
        Frame::new(vec![
            Column::text("text", ["I love cafes", "I hate malls", "I love cafes and malls"]),
            Column::text("channel", ["A", "B", "A"]),
        ])
        .unwrap()
    }

    fn texts(frame: &Frame) -> Vec<String> {
        frame
            .column("text")
            .unwrap()
            .values()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn and_keeps_rows_with_every_keyword() {
        let expr = KeywordExpr::from_list(&["love", "cafes"], Some("and")).unwrap();
        let out = filter_include(&posts(), "text", &expr).unwrap();
        assert_eq!(texts(&out), vec!["I love cafes", "I love cafes and malls"]);
        assert_eq!(out.num_columns(), 2);
    }

    #[test]
    fn or_keeps_rows_with_any_keyword() {
        let expr = KeywordExpr::from_list(&["hate", "cafes"], Some("or")).unwrap();
        let out = filter_include(&posts(), "text", &expr).unwrap();
        assert_eq!(out.num_rows(), 3);
    }

    #[test]
    fn exclude_single_keyword() {
        let out = filter_exclude(&posts(), "text", &KeywordExpr::keyword("malls")).unwrap();
        assert_eq!(texts(&out), vec!["I love cafes"]);
    }

    #[test]
    fn exclude_and_drops_rows_with_any_keyword() {
        let expr = KeywordExpr::from_list(&["hate", "cafes"], Some("and")).unwrap();
        let out = filter_exclude(&posts(), "text", &expr).unwrap();
        assert_eq!(out.num_rows(), 0);
    }

    #[test]
    fn empty_keyword_keeps_everything() {
        let out = filter_include(&posts(), "text", &KeywordExpr::keyword("")).unwrap();
        assert_eq!(out, posts());
    }

    #[test]
    fn empty_list_keeps_everything_both_ways() {
        let expr = KeywordExpr::from_list::<&str>(&[], None).unwrap();
        assert_eq!(filter_include(&posts(), "text", &expr).unwrap().num_rows(), 3);
        assert_eq!(filter_exclude(&posts(), "text", &expr).unwrap().num_rows(), 3);
    }

    #[test]
    fn null_cells_read_as_empty() {
        let frame = Frame::new(vec![Column::new(
            "text",
            vec![Value::Null, Value::from("cafe")],
        )])
        .unwrap();
        let out = filter_exclude(&frame, "text", &KeywordExpr::keyword("cafe")).unwrap();
        assert_eq!(out.column("text").unwrap().values(), &[Value::Null]);
    }

    #[test]
    fn empty_keyword_matches_null_cells() {
        let frame = Frame::new(vec![Column::new(
            "text",
            vec![Value::Null, Value::from("x")],
        )])
        .unwrap();
        let out = filter_include(&frame, "text", &KeywordExpr::keyword("")).unwrap();
        assert_eq!(out.num_rows(), 2);
    }

    #[test]
    fn missing_column_fails() {
        let err = filter_include(&posts(), "body", &KeywordExpr::keyword("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn equals_matches_whole_value() {
        let out = filter_equals(&posts(), "channel", "A").unwrap();
        assert_eq!(out.num_rows(), 2);
        assert_eq!(filter_equals(&posts(), "channel", "").unwrap().num_rows(), 0);
    }
}
