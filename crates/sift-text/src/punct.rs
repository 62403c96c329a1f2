//! Punctuation normalization and stripping.

use std::sync::LazyLock;

use regex::Regex;

use crate::{error::TextError, transform::TextTransformer};

/// Typographic characters and their plain replacements, applied first.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("‘", "'"),
    ("₹", "e"),
    ("´", "'"),
    ("°", ""),
    ("€", "e"),
    ("™", "tm"),
    ("√", " sqrt "),
    ("×", "x"),
    ("²", "2"),
    ("—", "-"),
    ("–", "-"),
    ("’", "'"),
    ("_", "-"),
    ("`", "'"),
    ("“", "\""),
    ("”", "\""),
    ("£", "e"),
    ("∞", "infinity"),
    ("θ", "theta"),
    ("÷", "/"),
    ("α", "alpha"),
    ("•", "."),
    ("à", "a"),
    ("−", "-"),
    ("β", "beta"),
    ("∅", ""),
    ("³", "3"),
    ("π", "pi"),
];

/// Characters that get a space on each side.
const SPACED: &str = "/-'?!.,#$%()*+:;<=>@[\\]^_`{|}~\"“”’∞θ÷α•à−β∅³π‘₹´°£€×™√²—–&";

/// Invisible and stray sequences, applied last.
const SPECIALS: &[(&str, &str)] = &[
    ("\u{200b}", " "),
    ("…", " ... "),
    ("\u{feff}", ""),
    ("करना", ""),
    ("है", ""),
];

/// Rewrites typographic punctuation to plain forms and pads punctuation with spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationNormalizer;

impl PunctuationNormalizer {
    /// Normalizes one text.
    pub fn normalize(text: &str) -> String {
        let mut text = text.to_string();
        for &(from, to) in SUBSTITUTIONS {
            text = text.replace(from, to);
        }

        let mut spaced = String::with_capacity(text.len() * 2);
        for ch in text.chars() {
            if SPACED.contains(ch) {
                spaced.push(' ');
                spaced.push(ch);
                spaced.push(' ');
            } else {
                spaced.push(ch);
            }
        }

        for &(from, to) in SPECIALS {
            spaced = spaced.replace(from, to);
        }
        spaced.trim().to_string()
    }
}

impl TextTransformer for PunctuationNormalizer {
    fn name(&self) -> &str {
        "punctuation-normalizer"
    }

    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        Ok(texts.iter().map(|t| Self::normalize(t)).collect())
    }
}

/// Punctuation removed by [`PunctuationStripper`].
static STRIPPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[@%\\*=()/~#&+á?Ã¡\-|.:;!,_$'"]"#).expect("punctuation pattern is valid")
});

/// Digit runs.
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// HTML tags.
static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Whitespace runs.
static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Removes punctuation, digits and HTML tags, lowercases, and collapses whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationStripper;

impl PunctuationStripper {
    /// Strips one text.
    pub fn strip(text: &str) -> String {
        let text = STRIPPED.replace_all(text, "");
        let text = DIGITS.replace_all(&text, "").to_lowercase();
        let text = SPACES.replace_all(&text, " ");
        let text = TAGS.replace_all(&text, "");
        SPACES.replace_all(&text, " ").trim().to_string()
    }
}

impl TextTransformer for PunctuationStripper {
    fn name(&self) -> &str {
        "punctuation-stripper"
    }

    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        Ok(texts.iter().map(|t| Self::strip(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizer_rewrites_typography() {
        assert_eq!(PunctuationNormalizer::normalize("“quoted”"), "\" quoted \"");
        assert_eq!(PunctuationNormalizer::normalize("3×4"), "3x4");
        assert_eq!(PunctuationNormalizer::normalize("π"), "pi");
    }

    #[test]
    fn normalizer_pads_punctuation() {
        assert_eq!(PunctuationNormalizer::normalize("hi!"), "hi !");
        assert_eq!(PunctuationNormalizer::normalize("a,b"), "a , b");
    }

    #[test]
    fn normalizer_handles_specials() {
        assert_eq!(PunctuationNormalizer::normalize("\u{feff}wait…"), "wait ...");
        assert_eq!(PunctuationNormalizer::normalize("a\u{200b}b"), "a b");
    }

    #[test]
    fn stripper_removes_noise() {
        assert_eq!(
            PunctuationStripper::strip("  Hello, World!! 2024 <b>bold</b>  "),
            "hello world bold"
        );
        assert_eq!(PunctuationStripper::strip("카페 좋아요~!!"), "카페 좋아요");
    }

    #[test]
    fn stripper_keeps_batch_length() {
        let texts = vec!["...".to_string(), "ok".to_string()];
        let out = PunctuationStripper.transform(&texts).unwrap();
        assert_eq!(out, vec!["", "ok"]);
    }
}
