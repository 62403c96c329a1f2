//! Keyword expressions for sift row filters.
//!
//! A keyword expression decides, per record, whether a text value belongs to a filter. It can
//! be built from a plain keyword list plus a combinator, or parsed from a small query language:
//!
//! - **Keywords**: `cafe` - value must contain the substring
//! - **Phrases**: `"coffee shop"` - the quoted text is one keyword, spaces included
//! - **Negation**: `-mall` - value must NOT contain the keyword
//! - **AND**: `love cafe` or `love AND cafe` - every side must hold
//! - **OR**: `cafe OR bakery` - at least one side must hold
//! - **Grouping**: `(cafe OR bakery) -mall` - precedence control
//!
//! Matching is plain substring membership: `love AND cafe` holds for a value containing both
//! substrings anywhere, in any order.
//!
//! # Example
//!
//! ```
//! use sift_query::{KeywordExpr, Polarity, parse};
//!
//! let expr = parse("love (cafe OR bakery)").unwrap().unwrap();
//! assert!(expr.matches("I love this bakery", Polarity::Include));
//!
//! let listed = KeywordExpr::from_list(&["love", "cafes"], Some("and")).unwrap();
//! assert!(!listed.matches("I love malls", Polarity::Include));
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::{Combinator, KeywordExpr, Polarity};
pub use error::{LexError, ParseError, QueryError, QueryErrorKind};
pub use lexer::{Token, tokenize};
pub use parser::parse;
