//! Substitution of commonly confused loanword spellings.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::TextError, transform::TextTransformer};

/// File name of the loanword table looked up when none is configured.
pub const DEFAULT_LOANWORD_FILE: &str = "confused_loanwords.txt";

/// A table of `wrong -> right` spellings loaded from a tab-separated file.
///
/// Each non-blank line holds a misspelling and its replacement separated by a tab.
/// Substitutions apply in file order; a repeated misspelling keeps its first position and
/// takes the last replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanwordTable {
    /// Substitution pairs in application order.
    entries: Vec<(String, String)>,
}

impl LoanwordTable {
    /// Loads a table from `path`.
    ///
    /// A missing file is a `ResourceMissing` error.
    pub fn load(path: &Path) -> Result<Self, TextError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TextError::ResourceMissing {
                path: path.to_path_buf(),
            },
            _ => TextError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let table = Self::parse(&content, path)?;
        debug!(path = %path.display(), entries = table.len(), "loaded loanword table");
        Ok(table)
    }

    /// Parses table text; `origin` names the source in errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, TextError> {
        let mut table = Self::default();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((wrong, right)) = line.split_once('\t') else {
                return Err(TextError::Malformed {
                    path: PathBuf::from(origin),
                    line: index + 1,
                    content: line.to_string(),
                });
            };
            let right = right.split('\t').next().unwrap_or_default();
            table.insert(wrong, right);
        }
        Ok(table)
    }

    /// Adds or updates one substitution.
    pub fn insert(&mut self, wrong: &str, right: &str) {
        match self.entries.iter_mut().find(|(w, _)| w == wrong) {
            Some(entry) => entry.1 = right.to_string(),
            None => self.entries.push((wrong.to_string(), right.to_string())),
        }
    }

    /// Returns the number of substitutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies every substitution to `text`, in order.
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .filter(|(wrong, _)| !wrong.is_empty())
            .fold(text.to_string(), |acc, (wrong, right)| acc.replace(wrong.as_str(), right))
    }
}

impl TextTransformer for LoanwordTable {
    fn name(&self) -> &str {
        "loanwords"
    }

    fn transform(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        Ok(texts.iter().map(|t| self.apply(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("inline.txt")
    }

    #[test]
    fn parses_pairs_in_order() {
        let table = LoanwordTable::parse("악세사리\t액세서리\n\n컨텐츠\t콘텐츠\n", origin()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.apply("컨텐츠 악세사리"), "콘텐츠 액세서리");
    }

    #[test]
    fn repeated_key_takes_last_value() {
        let table = LoanwordTable::parse("a\tb\na\tc\n", origin()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.apply("a"), "c");
    }

    #[test]
    fn line_without_tab_is_malformed() {
        let err = LoanwordTable::parse("ok\tfine\nbroken line\n", origin()).unwrap_err();
        assert!(matches!(err, TextError::Malformed { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoanwordTable::load(&dir.path().join(DEFAULT_LOANWORD_FILE)).unwrap_err();
        assert!(matches!(err, TextError::ResourceMissing { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOANWORD_FILE);
        fs::write(&path, "쥬스\t주스\n").unwrap();
        let table = LoanwordTable::load(&path).unwrap();
        let out = table.transform(&["오렌지쥬스".to_string()]).unwrap();
        assert_eq!(out, vec!["오렌지주스"]);
    }
}
