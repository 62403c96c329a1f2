//! Keyword predicate tree.
//!
//! A `KeywordExpr` is evaluated against one text value at a time. Leaves test substring
//! membership; interior nodes combine the per-leaf truth values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// How the leaves of an expression are read when filtering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// A leaf holds when the value contains the keyword.
    #[default]
    Include,
    /// A leaf holds when the value does NOT contain the keyword.
    Exclude,
}

/// Rule joining the per-keyword results of a keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every keyword predicate must hold.
    And,
    /// At least one keyword predicate must hold.
    Or,
}

impl FromStr for Combinator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(QueryError::combinator(format!(
                "unknown combinator '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

/// A keyword predicate tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordExpr {
    /// Substring membership test for a single keyword.
    Keyword(String),

    /// Negation of the inner expression.
    Not(Box<Self>),

    /// Conjunction: all sub-expressions must hold. Empty holds for every value.
    And(Vec<Self>),

    /// Disjunction: at least one sub-expression must hold.
    Or(Vec<Self>),
}

impl KeywordExpr {
    /// Creates a single-keyword leaf.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword(keyword.into())
    }

    /// Creates an And expression, flattening nested Ands.
    pub fn and(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::And(inner) if !inner.is_empty() => inner,
                other => vec![other],
            })
            .collect();

        match <[Self; 1]>::try_from(flattened) {
            Ok([single]) => single,
            Err(many) => Self::And(many),
        }
    }

    /// Creates an Or expression, flattening nested Ors.
    pub fn or(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::Or(inner) if !inner.is_empty() => inner,
                other => vec![other],
            })
            .collect();

        match <[Self; 1]>::try_from(flattened) {
            Ok([single]) => single,
            Err(many) => Self::Or(many),
        }
    }

    /// Builds an expression from a keyword list and an optional combinator name.
    ///
    /// A list of two or more keywords must name its combinator (`"and"` or `"or"`); anything
    /// else is rejected before any value is inspected. A single keyword becomes a leaf, and
    /// an empty list becomes an empty conjunction that holds for every value; `logic` is
    /// ignored for both.
    pub fn from_list<S: AsRef<str>>(keywords: &[S], logic: Option<&str>) -> Result<Self, QueryError> {
        let leaves: Vec<Self> = keywords
            .iter()
            .map(|k| Self::keyword(k.as_ref()))
            .collect();

        if leaves.len() < 2 {
            return Ok(Self::and(leaves));
        }

        match logic.map(str::parse::<Combinator>).transpose()? {
            Some(Combinator::And) => Ok(Self::And(leaves)),
            Some(Combinator::Or) => Ok(Self::Or(leaves)),
            None => Err(QueryError::combinator(format!(
                "{} keywords given without a combinator",
                leaves.len()
            ))),
        }
    }

    /// Evaluates the expression against a text value.
    ///
    /// Under `Polarity::Exclude` every leaf is negated before the combinators are applied,
    /// so `And` of excluded keywords keeps values containing none of them and `Or` keeps
    /// values missing at least one.
    pub fn matches(&self, text: &str, polarity: Polarity) -> bool {
        match self {
            Self::Keyword(k) => text.contains(k.as_str()) == (polarity == Polarity::Include),
            Self::Not(inner) => !inner.matches(text, polarity),
            Self::And(exprs) => exprs.iter().all(|e| e.matches(text, polarity)),
            Self::Or(exprs) => exprs.iter().any(|e| e.matches(text, polarity)),
        }
    }

    /// Returns true for the empty conjunction, which places no constraint on rows.
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::And(exprs) if exprs.is_empty())
    }

    /// Collects every keyword in the tree, left to right.
    pub fn keywords(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_keywords(&mut out);
        out
    }

    /// Recursive helper for `keywords`.
    fn collect_keywords<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Keyword(k) => out.push(k),
            Self::Not(inner) => inner.collect_keywords(out),
            Self::And(exprs) | Self::Or(exprs) => {
                for e in exprs {
                    e.collect_keywords(out);
                }
            }
        }
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Keyword(k) => writeln!(f, "{prefix}Keyword({k:?})"),
            Self::Not(inner) => {
                writeln!(f, "{prefix}Not")?;
                inner.fmt_tree(f, indent + 1)
            }
            Self::And(exprs) => {
                writeln!(f, "{prefix}And")?;
                for expr in exprs {
                    expr.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
            Self::Or(exprs) => {
                writeln!(f, "{prefix}Or")?;
                for expr in exprs {
                    expr.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }

    /// Formats the expression back into query syntax.
    ///
    /// Keywords containing whitespace or syntax characters are quoted so the output parses
    /// back to the same tree.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Keyword(k) => quote_if_needed(k),
            Self::Not(inner) => match inner.as_ref() {
                Self::Keyword(_) | Self::Not(_) => format!("-{}", inner.to_query_string()),
                _ => format!("-({})", inner.to_query_string()),
            },
            Self::And(exprs) => exprs
                .iter()
                .map(|e| match e {
                    Self::Or(_) => format!("({})", e.to_query_string()),
                    _ => e.to_query_string(),
                })
                .collect::<Vec<_>>()
                .join(" "),
            Self::Or(exprs) => exprs
                .iter()
                .map(|e| match e {
                    Self::And(inner) if inner.len() > 1 => format!("({})", e.to_query_string()),
                    _ => e.to_query_string(),
                })
                .collect::<Vec<_>>()
                .join(" OR "),
        }
    }
}

/// Wraps a keyword in quotes when it would not lex back as a single bare term.
fn quote_if_needed(keyword: &str) -> String {
    let bare = !keyword.is_empty()
        && keyword != "OR"
        && keyword != "AND"
        && !keyword.starts_with('-')
        && !keyword
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '(' | ')'));
    if bare {
        keyword.to_string()
    } else {
        format!("\"{keyword}\"")
    }
}

impl fmt::Display for KeywordExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_flattens_nested() {
        let nested = KeywordExpr::and(vec![
            KeywordExpr::keyword("a"),
            KeywordExpr::And(vec![KeywordExpr::keyword("b"), KeywordExpr::keyword("c")]),
        ]);

        assert_eq!(
            nested,
            KeywordExpr::And(vec![
                KeywordExpr::keyword("a"),
                KeywordExpr::keyword("b"),
                KeywordExpr::keyword("c"),
            ])
        );
    }

    #[test]
    fn or_single_element_unwraps() {
        let single = KeywordExpr::or(vec![KeywordExpr::keyword("a")]);
        assert_eq!(single, KeywordExpr::keyword("a"));
    }

    #[test]
    fn list_requires_combinator() {
        let err = KeywordExpr::from_list(&["love", "cafes"], None).unwrap_err();
        assert!(matches!(err.kind, crate::QueryErrorKind::Combinator { .. }));
    }

    #[test]
    fn list_rejects_unknown_combinator() {
        assert!(KeywordExpr::from_list(&["love", "cafes"], Some("AND")).is_err());
        assert!(KeywordExpr::from_list(&["love", "cafes"], Some("xor")).is_err());
    }

    #[test]
    fn combinator_is_ignored_below_two_keywords() {
        let expr = KeywordExpr::from_list(&["love"], Some("AND")).unwrap();
        assert_eq!(expr, KeywordExpr::keyword("love"));
        let expr = KeywordExpr::from_list::<&str>(&[], Some("xor")).unwrap();
        assert!(expr.is_unconstrained());
    }

    #[test]
    fn single_keyword_needs_no_combinator() {
        let expr = KeywordExpr::from_list(&["love"], None).unwrap();
        assert_eq!(expr, KeywordExpr::keyword("love"));
    }

    #[test]
    fn empty_list_matches_everything() {
        let expr = KeywordExpr::from_list::<&str>(&[], None).unwrap();
        assert!(expr.is_unconstrained());
        assert!(expr.matches("anything", Polarity::Include));
        assert!(expr.matches("anything", Polarity::Exclude));
    }

    #[test]
    fn and_is_order_independent() {
        let expr = KeywordExpr::from_list(&["love", "cafe"], Some("and")).unwrap();
        assert!(expr.matches("cafe ... love", Polarity::Include));
        assert!(expr.matches("love ... cafe", Polarity::Include));
        assert!(!expr.matches("love only", Polarity::Include));
    }

    #[test]
    fn empty_keyword_is_substring_of_everything() {
        let expr = KeywordExpr::keyword("");
        assert!(expr.matches("abc", Polarity::Include));
        assert!(expr.matches("", Polarity::Include));
        assert!(!expr.matches("abc", Polarity::Exclude));
    }

    #[test]
    fn exclude_negates_leaves_before_combining() {
        let and = KeywordExpr::from_list(&["a", "b"], Some("and")).unwrap();
        assert!(and.matches("xyz", Polarity::Exclude));
        assert!(!and.matches("a only", Polarity::Exclude));

        let or = KeywordExpr::from_list(&["a", "b"], Some("or")).unwrap();
        assert!(or.matches("a only", Polarity::Exclude));
        assert!(!or.matches("a and b", Polarity::Exclude));
    }

    #[test]
    fn keywords_lists_leaves_in_order() {
        let expr = KeywordExpr::or(vec![
            KeywordExpr::keyword("x"),
            KeywordExpr::Not(Box::new(KeywordExpr::keyword("y"))),
        ]);
        assert_eq!(expr.keywords(), vec!["x", "y"]);
    }

    #[test]
    fn query_string_quotes_phrases() {
        let expr = KeywordExpr::and(vec![
            KeywordExpr::keyword("coffee shop"),
            KeywordExpr::or(vec![KeywordExpr::keyword("a"), KeywordExpr::keyword("b")]),
        ]);
        assert_eq!(expr.to_query_string(), "\"coffee shop\" (a OR b)");
    }
}
