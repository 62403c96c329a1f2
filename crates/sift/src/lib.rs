//! sift: preprocessing for tabular text records.
//!
//! sift loads a table of posts or comments (a timestamp column, free-text columns,
//! categorical columns and URLs), filters rows by keyword, buckets them over time, counts
//! categories and URL-derived entities, and cleans up text columns. Every operation returns
//! a new table; inputs are never modified.

#![warn(missing_docs)]

pub mod cli;
