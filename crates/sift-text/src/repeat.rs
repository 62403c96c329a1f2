//! Collapsing of repeated characters.

use std::iter;

use crate::{error::TextError, transform::TextTransformer};

/// Copies kept of a repeated character when none is configured.
pub const DEFAULT_REPEATS: usize = 2;

/// Shortest run of one word character that gets collapsed.
const MIN_RUN: usize = 3;

/// Shortens runs of three or more identical word characters and collapses whitespace.
///
/// `ㅋㅋㅋㅋㅋ` becomes `ㅋㅋ` with the default of two repeats.
#[derive(Debug, Clone, Copy)]
pub struct RepeatCollapser {
    /// Copies kept of each collapsed run.
    repeats: usize,
}

impl RepeatCollapser {
    /// Creates a collapser keeping `repeats` copies of each long run.
    ///
    /// Zero leaves runs untouched and only collapses whitespace.
    pub fn new(repeats: usize) -> Self {
        Self { repeats }
    }

    /// Collapses one text.
    pub fn collapse(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            let mut run = 1;
            while chars.next_if_eq(&ch).is_some() {
                run += 1;
            }
            let keep = if self.repeats > 0 && run >= MIN_RUN && is_word_char(ch) {
                self.repeats
            } else {
                run
            };
            out.extend(iter::repeat_n(ch, keep));
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for RepeatCollapser {
    fn default() -> Self {
        Self::new(DEFAULT_REPEATS)
    }
}

impl TextTransformer for RepeatCollapser {
    fn name(&self) -> &str {
        "repeat-collapser"
    }

    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        Ok(texts.iter().map(|t| self.collapse(t)).collect())
    }
}

/// Returns true for letters, digits, marks and underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
