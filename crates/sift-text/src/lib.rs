//! Text-normalization stages and noun frequency counting.
//!
//! Every stage implements [`TextTransformer`]: it takes a batch of texts and returns a batch
//! of the same length, in the same order. Stages are chained with [`TextPipeline`], which
//! checks the length contract after each one. Services that need external models, such as
//! spacing correction or spell checking, plug in as further `TextTransformer`
//! implementations.
//!
//! ```
//! use sift_text::{PunctuationStripper, RepeatCollapser, TextPipeline};
//!
//! let pipeline = TextPipeline::new()
//!     .stage(PunctuationStripper)
//!     .stage(RepeatCollapser::default());
//! let out = pipeline.run(vec!["Sooooo GOOD!!! 123".to_string()]).unwrap();
//! assert_eq!(out, vec!["soo good"]);
//! ```

#![warn(missing_docs)]

mod error;
mod loanword;
mod nouns;
mod punct;
mod repeat;
mod transform;

pub use error::TextError;
pub use loanword::{DEFAULT_LOANWORD_FILE, LoanwordTable};
pub use nouns::{FREQUENCY_COLUMN, NounAnalyzer, TERMS_COLUMN, noun_frequencies, write_frequencies};
pub use punct::{PunctuationNormalizer, PunctuationStripper};
pub use repeat::{DEFAULT_REPEATS, RepeatCollapser};
pub use transform::{SentenceSplitter, TextPipeline, TextTransformer, split_sentences};
