//! Fixed report recipes chaining the engines.

use sift_query::KeywordExpr;
use tracing::debug;

use crate::{
    Result,
    category::{SortOrder, count_by_category},
    count::CountTable,
    entity::{EntityRule, extract_entity},
    frame::{Column, Frame},
    keyword::{filter_equals, filter_include},
    period::{Bucket, Period, count_by_period},
    time::normalize_time,
    value::Value,
};

/// Name and cell value of the separator columns in a top-N report.
pub const SPACER: &str = "|";

/// Counts the records matching `expr` per calendar month.
///
/// `time_column` is parsed with `format`, rows are kept by keyword inclusion on
/// `text_column`, and the survivors are counted per month, earliest first, with empty
/// months kept.
pub fn monthly_keyword_counts(
    frame: &Frame,
    text_column: &str,
    time_column: &str,
    format: &str,
    expr: &KeywordExpr,
) -> Result<CountTable<Bucket>> {
    let normalized = normalize_time(frame, time_column, format)?;
    let matching = filter_include(&normalized, text_column, expr)?;
    count_by_period(&matching, time_column, Period::Month, false, true)
}

/// Builds a side-by-side report of the `n` most frequent values of each column.
///
/// Each column contributes a block of `[column, count]` (plus `percentage` when
/// `with_percentage`), ranked by descending count. Blocks are exactly `n` rows tall; columns
/// with fewer distinct values are padded with empty cells. A spacer column named [`SPACER`]
/// precedes the first block and follows every block.
pub fn top_n_across_columns<S: AsRef<str>>(
    frame: &Frame,
    columns: &[S],
    n: usize,
    with_percentage: bool,
) -> Result<Frame> {
    let mut parts = vec![spacer(n)];
    for column in columns {
        let counts = count_by_category(frame, column.as_ref(), SortOrder::Descending, with_percentage)?;
        parts.push(counts.head(n).to_frame().resized(n));
        parts.push(spacer(n));
    }

    let report = Frame::hconcat(parts);
    debug!(
        blocks = columns.len(),
        rows = report.num_rows(),
        "top-n report done"
    );
    Ok(report)
}

/// Counts records per URL-derived entity among rows where `filter_column` equals
/// `filter_value`, using the default site marker.
pub fn count_per_entity_from_url(
    frame: &Frame,
    filter_column: &str,
    filter_value: &str,
    url_column: &str,
) -> Result<CountTable<Value>> {
    count_per_entity_from_url_with(
        frame,
        filter_column,
        filter_value,
        url_column,
        &EntityRule::default(),
    )
}

/// Like [`count_per_entity_from_url`], with an explicit extraction rule.
pub fn count_per_entity_from_url_with(
    frame: &Frame,
    filter_column: &str,
    filter_value: &str,
    url_column: &str,
    rule: &EntityRule,
) -> Result<CountTable<Value>> {
    let selected = filter_equals(frame, filter_column, filter_value)?;
    let tagged = extract_entity(&selected, url_column, rule)?;
    count_by_category(&tagged, &rule.output_column, SortOrder::Descending, true)
}

/// Returns an `n`-row spacer frame.
fn spacer(n: usize) -> Frame {
    Frame::from(Column::text(SPACER, vec![SPACER; n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Frame {
        Frame::new(vec![
            Column::text(
                "date",
                ["24.01.05.", "24.01.05.", "24.02.11.", "24.03.10.", "24.03.12."],
            ),
            Column::text(
                "text",
                [
                    "I love cafes",
                    "cafes are fine",
                    "I hate malls",
                    "love this cafe",
                    "love it",
                ],
            ),
            Column::text("channel", ["A", "B", "A", "C", "A"]),
            Column::text("board", ["x", "y", "x", "x", "z"]),
        ])
        .unwrap()
    }

    #[test]
    fn monthly_counts_keep_empty_months() {
        let expr = KeywordExpr::keyword("love");
        let table = monthly_keyword_counts(&posts(), "text", "date", "%y.%m.%d.", &expr).unwrap();
        let rows: Vec<_> = table.rows().iter().map(|r| (r.key.label(), r.count)).collect();
        assert_eq!(
            rows,
            vec![
                ("2024-01".to_string(), 1),
                ("2024-02".to_string(), 0),
                ("2024-03".to_string(), 2),
            ]
        );
    }

    #[test]
    fn monthly_counts_report_bad_dates() {
        let frame = posts()
            .with_column(Column::text("date", ["24.01.05.", "?", "", "", ""]))
            .unwrap();
        let expr = KeywordExpr::keyword("love");
        assert!(monthly_keyword_counts(&frame, "text", "date", "%y.%m.%d.", &expr).is_err());
    }

    #[test]
    fn top_n_layout() {
        let report = top_n_across_columns(&posts(), &["channel", "board"], 2, true).unwrap();
        assert_eq!(
            report.column_names(),
            vec![
                "|", "channel", "count", "percentage", "|", "board", "count", "percentage", "|"
            ]
        );
        assert_eq!(report.num_rows(), 2);
        assert_eq!(
            report.columns()[1].values(),
            &[Value::from("A"), Value::from("B")]
        );
        assert_eq!(report.columns()[3].values(), &[Value::Float(60.0), Value::Float(20.0)]);
        assert_eq!(report.columns()[5].values(), &[Value::from("x"), Value::from("y")]);
        assert!(report.columns()[0].values().iter().all(|v| v == &Value::from(SPACER)));
    }

    #[test]
    fn top_n_pads_short_blocks() {
        let report = top_n_across_columns(&posts(), &["board"], 5, false).unwrap();
        assert_eq!(report.column_names(), vec!["|", "board", "count", "|"]);
        assert_eq!(report.num_rows(), 5);
        let counts = report.columns()[2].values();
        assert_eq!(counts[0], Value::Count(3));
        assert!(counts[3].is_null() && counts[4].is_null());
    }

    #[test]
    fn top_n_with_no_columns_is_one_spacer() {
        let report = top_n_across_columns::<&str>(&posts(), &[], 3, false).unwrap();
        assert_eq!(report.column_names(), vec!["|"]);
    }

    #[test]
    fn entity_counts() {
        let frame = Frame::new(vec![
            Column::text("source", ["cafe", "cafe", "blog", "cafe"]),
            Column::text(
                "url",
                [
                    "https://cafe.naver.com/myroom/1",
                    "https://cafe.naver.com/other/2",
                    "https://blog.naver.com/x/1",
                    "https://cafe.naver.com/myroom/3",
                ],
            ),
        ])
        .unwrap();
        let table = count_per_entity_from_url(&frame, "source", "cafe", "url").unwrap();
        let rows: Vec<_> = table
            .rows()
            .iter()
            .map(|r| (r.key.to_string(), r.count, r.percentage))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("cafe.naver.com/myroom".to_string(), 2, Some(66.6667)),
                ("cafe.naver.com/other".to_string(), 1, Some(33.3333)),
            ]
        );
    }

    #[test]
    fn entity_counts_fail_on_foreign_url() {
        let frame = Frame::new(vec![
            Column::text("source", ["cafe"]),
            Column::text("url", ["https://blog.naver.com/x/1"]),
        ])
        .unwrap();
        let err = count_per_entity_from_url(&frame, "source", "cafe", "url").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Validation);
    }
}
