//! Immutable tables and the filtering and counting engines that run over them.
//!
//! Every operation reads a [`Frame`] by reference and returns a new value; no caller-visible
//! table is ever modified. The engines are:
//!
//! - [`normalize_time`]: parse a text column into time points with an explicit format
//! - [`filter_include`] / [`filter_exclude`]: keep rows by keyword membership
//! - [`count_by_period`]: count rows per day, week, month or year with zero-filled gaps
//! - [`count_by_category`]: count rows per distinct value, optionally ranked with percentages
//! - [`extract_entity`]: derive an entity identifier column from structured URLs
//!
//! The [`pipeline`] module chains them into fixed report recipes.
//!
//! # Example
//!
//! ```
//! use sift_frame::{Column, Frame, SortOrder, count_by_category};
//!
//! let frame = Frame::new(vec![Column::text("channel", ["A", "B", "A", "C", "A"])]).unwrap();
//! let counts = count_by_category(&frame, "channel", SortOrder::Descending, true).unwrap();
//! assert_eq!(counts.rows()[0].count, 3);
//! assert_eq!(counts.rows()[0].percentage, Some(60.0));
//! ```

#![warn(missing_docs)]

use std::result;

mod category;
mod count;
mod entity;
mod error;
mod frame;
mod io;
mod keyword;
mod period;
pub mod pipeline;
mod time;
mod value;

pub use category::{SortOrder, count_by_category};
pub use count::{CountRow, CountTable};
pub use entity::{DEFAULT_ENTITY_COLUMN, DEFAULT_SITE_MARKER, EntityRule, entity_id, extract_entity};
pub use error::{ErrorKind, FrameError};
pub use frame::{Column, Frame};
pub use io::{read_csv, read_csv_from, write_csv, write_csv_to};
pub use keyword::{filter, filter_equals, filter_exclude, filter_include};
pub use period::{Bucket, Period, count_by_period};
pub use pipeline::{
    SPACER, count_per_entity_from_url, count_per_entity_from_url_with, monthly_keyword_counts,
    top_n_across_columns,
};
pub use sift_query::{Combinator, KeywordExpr, Polarity};
pub use time::{normalize_time, parse_time_point, validate_format};
pub use value::{Value, ValueKind};

/// Result alias for frame operations.
pub type Result<T> = result::Result<T, FrameError>;
