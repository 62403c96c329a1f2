//! Counting records per calendar bucket.
//!
//! Exact time points are counted first, then summed into day, week, month or year buckets.
//! Every bucket between the earliest and the latest observed point is produced, including
//! those no record fell into.

use std::{collections::BTreeMap, fmt, result, str::FromStr};

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{
    Result,
    count::CountTable,
    error::FrameError,
    frame::Frame,
    value::{Value, ValueKind},
};

/// Width of a calendar bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    /// One calendar day.
    Day,
    /// Seven days ending on a Sunday.
    Week,
    /// One calendar month.
    Month,
    /// One calendar year.
    Year,
}

impl Period {
    /// Returns the canonical token for this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl FromStr for Period {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "day" => Ok(Self::Day),
            "w" | "week" => Ok(Self::Week),
            "m" | "month" => Ok(Self::Month),
            "y" | "year" => Ok(Self::Year),
            _ => Err(FrameError::UnknownPeriod {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar bucket.
///
/// Buckets are identified by a representative date: the day itself, the Sunday closing the
/// week, or the first day of the month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket {
    /// Representative date.
    date: NaiveDate,
    /// Bucket width.
    period: Period,
}

impl Bucket {
    /// Returns the bucket of width `period` containing `date`.
    pub fn containing(date: NaiveDate, period: Period) -> Self {
        let date = match period {
            Period::Day => date,
            Period::Week => {
                let to_sunday = (7 - date.weekday().num_days_from_sunday()) % 7;
                date + Days::new(u64::from(to_sunday))
            }
            Period::Month => date - Days::new(u64::from(date.day0())),
            Period::Year => date - Days::new(u64::from(date.ordinal0())),
        };
        Self { date, period }
    }

    /// Returns the following bucket of the same width, if representable.
    pub fn next(self) -> Option<Self> {
        let date = match self.period {
            Period::Day => self.date.checked_add_days(Days::new(1)),
            Period::Week => self.date.checked_add_days(Days::new(7)),
            Period::Month => self.date.checked_add_months(Months::new(1)),
            Period::Year => self.date.checked_add_months(Months::new(12)),
        }?;
        Some(Self {
            date,
            period: self.period,
        })
    }

    /// Returns the representative date.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the bucket width.
    pub fn period(self) -> Period {
        self.period
    }

    /// Formats the bucket as `2024-01-05`, `2024-01` or `2024` depending on its width.
    pub fn label(self) -> String {
        let format = match self.period {
            Period::Day | Period::Week => "%Y-%m-%d",
            Period::Month => "%Y-%m",
            Period::Year => "%Y",
        };
        self.date.format(format).to_string()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl From<Bucket> for Value {
    fn from(bucket: Bucket) -> Self {
        Self::Text(bucket.label())
    }
}

/// Counts records per `period` bucket of `time_column`.
///
/// The column must hold parsed time points. Buckets are generated densely between the
/// first and last observed bucket; `drop_zero` then removes empty ones. Rows are ordered by
/// bucket, earliest first when `ascending`.
pub fn count_by_period(
    frame: &Frame,
    time_column: &str,
    period: Period,
    drop_zero: bool,
    ascending: bool,
) -> Result<CountTable<Bucket>> {
    let column = frame.column(time_column)?;
    column.expect_kind(ValueKind::Time)?;

    let mut exact: BTreeMap<NaiveDateTime, u64> = BTreeMap::new();
    for time in column.values().iter().filter_map(Value::as_time) {
        *exact.entry(time).or_default() += 1;
    }

    let mut buckets: BTreeMap<Bucket, u64> = BTreeMap::new();
    if let (Some(first), Some(last)) = (exact.keys().next(), exact.keys().next_back()) {
        let last = Bucket::containing(last.date(), period);
        let mut cursor = Bucket::containing(first.date(), period);
        loop {
            buckets.insert(cursor, 0);
            if cursor >= last {
                break;
            }
            match cursor.next() {
                Some(next) => cursor = next,
                None => break,
            }
        }
    }
    for (time, n) in &exact {
        *buckets
            .entry(Bucket::containing(time.date(), period))
            .or_default() += n;
    }

    let rows = buckets.into_iter().filter(|&(_, n)| !drop_zero || n > 0);
    let mut table = CountTable::new(time_column, rows);
    if !ascending {
        table = table.reversed();
    }

    debug!(
        column = time_column,
        %period,
        records = frame.num_rows(),
        buckets = table.len(),
        "period count done"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, ErrorKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn times(dates: &[NaiveDate]) -> Frame {
        let values = dates
            .iter()
            .map(|d| Value::Time(d.and_hms_opt(12, 0, 0).unwrap()))
            .collect();
        Frame::new(vec![Column::new("date", values)]).unwrap()
    }

    fn labels(table: &CountTable<Bucket>) -> Vec<(String, u64)> {
        table.rows().iter().map(|r| (r.key.label(), r.count)).collect()
    }

    #[test]
    fn period_tokens() {
        assert_eq!("m".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("Week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Y".parse::<Period>().unwrap(), Period::Year);
        let err = "quarter".parse::<Period>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn week_ends_on_sunday() {
        // 2024-01-05 is a Friday.
        assert_eq!(Bucket::containing(date(2024, 1, 5), Period::Week).date(), date(2024, 1, 7));
        assert_eq!(Bucket::containing(date(2024, 1, 7), Period::Week).date(), date(2024, 1, 7));
        assert_eq!(Bucket::containing(date(2024, 1, 8), Period::Week).date(), date(2024, 1, 14));
    }

    #[test]
    fn month_and_year_start() {
        assert_eq!(Bucket::containing(date(2024, 3, 10), Period::Month).label(), "2024-03");
        assert_eq!(Bucket::containing(date(2024, 3, 10), Period::Year).date(), date(2024, 1, 1));
    }

    #[test]
    fn months_are_zero_filled() {
        let frame = times(&[date(2024, 1, 5), date(2024, 1, 5), date(2024, 3, 10)]);
        let table = count_by_period(&frame, "date", Period::Month, false, true).unwrap();
        assert_eq!(
            labels(&table),
            vec![
                ("2024-01".to_string(), 2),
                ("2024-02".to_string(), 0),
                ("2024-03".to_string(), 1),
            ]
        );
    }

    #[test]
    fn drop_zero_removes_empty_buckets() {
        let frame = times(&[date(2024, 1, 5), date(2024, 3, 10)]);
        let table = count_by_period(&frame, "date", Period::Month, true, true).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn descending_reverses() {
        let frame = times(&[date(2024, 1, 5), date(2024, 1, 9), date(2024, 1, 20)]);
        let asc = count_by_period(&frame, "date", Period::Week, false, true).unwrap();
        let desc = count_by_period(&frame, "date", Period::Week, false, false).unwrap();
        assert_eq!(asc.reversed(), desc);
        assert_eq!(
            labels(&desc),
            vec![
                ("2024-01-21".to_string(), 1),
                ("2024-01-14".to_string(), 1),
                ("2024-01-07".to_string(), 1),
            ]
        );
    }

    #[test]
    fn days_span_range() {
        let frame = times(&[date(2024, 2, 28), date(2024, 3, 1)]);
        let table = count_by_period(&frame, "date", Period::Day, false, true).unwrap();
        assert_eq!(
            labels(&table),
            vec![
                ("2024-02-28".to_string(), 1),
                ("2024-02-29".to_string(), 0),
                ("2024-03-01".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let frame = Frame::new(vec![Column::new("date", vec![])]).unwrap();
        let table = count_by_period(&frame, "date", Period::Year, false, true).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn text_column_is_schema_error() {
        let frame = Frame::new(vec![Column::text("date", ["2024-01-05"])]).unwrap();
        let err = count_by_period(&frame, "date", Period::Day, false, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }
}
