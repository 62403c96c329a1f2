//! Entity identifiers derived from structured URLs.
//!
//! A URL such as `https://cafe.naver.com/myroom/123` splits on `/` into
//! `["https:", "", "cafe.naver.com", "myroom", "123"]`. The third token is the domain and
//! must contain the site marker; the identifier joins the domain with the following token.

use tracing::debug;

use crate::{
    Result,
    error::FrameError,
    frame::{Column, Frame},
    value::Value,
};

/// Site family marker used when none is configured.
pub const DEFAULT_SITE_MARKER: &str = "cafe";

/// Name of the derived column when none is configured.
pub const DEFAULT_ENTITY_COLUMN: &str = "entity";

/// Index of the domain token after splitting on `/`.
const DOMAIN_TOKEN: usize = 2;

/// How identifiers are derived from a URL column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRule {
    /// Substring the domain token must contain.
    pub marker: String,
    /// Name of the column that receives the identifiers.
    pub output_column: String,
}

impl Default for EntityRule {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SITE_MARKER.to_string(),
            output_column: DEFAULT_ENTITY_COLUMN.to_string(),
        }
    }
}

/// Returns the identifier of `url`, or `None` if its domain lacks `marker`.
///
/// ```
/// use sift_frame::entity_id;
///
/// assert_eq!(
///     entity_id("https://cafe.naver.com/myroom/123", "cafe").as_deref(),
///     Some("cafe.naver.com/myroom")
/// );
/// assert_eq!(entity_id("https://blog.naver.com/x/1", "cafe"), None);
/// ```
pub fn entity_id(url: &str, marker: &str) -> Option<String> {
    let tokens: Vec<&str> = url.split('/').collect();
    let domain = tokens.get(DOMAIN_TOKEN)?;
    if !domain.contains(marker) {
        return None;
    }
    let end = tokens.len().min(DOMAIN_TOKEN + 2);
    Some(tokens[DOMAIN_TOKEN..end].join("/"))
}

/// Returns `frame` with an identifier column derived from `url_column`.
///
/// Every URL is checked before any identifier is produced; one non-conforming value fails
/// the whole call. The output column must not already exist.
pub fn extract_entity(frame: &Frame, url_column: &str, rule: &EntityRule) -> Result<Frame> {
    let urls = frame.column(url_column)?;
    if frame.has_column(&rule.output_column) {
        return Err(FrameError::DuplicateColumn {
            column: rule.output_column.clone(),
        });
    }

    let ids = urls
        .values()
        .iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .as_text()
                .and_then(|url| entity_id(url, &rule.marker))
                .map(Value::Text)
                .ok_or_else(|| FrameError::UrlDomain {
                    column: url_column.to_string(),
                    row,
                    url: value.to_string(),
                    marker: rule.marker.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let out = frame
        .clone()
        .with_column(Column::new(rule.output_column.clone(), ids))?;
    debug!(
        column = url_column,
        output = %rule.output_column,
        rows = out.num_rows(),
        "entity extraction done"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn id_joins_domain_and_next_segment() {
        assert_eq!(
            entity_id("https://cafe.naver.com/myroom/123", "cafe").as_deref(),
            Some("cafe.naver.com/myroom")
        );
    }

    #[test]
    fn id_of_bare_domain() {
        assert_eq!(
            entity_id("https://cafe.daum.net", "cafe").as_deref(),
            Some("cafe.daum.net")
        );
    }

    #[test]
    fn short_urls_have_no_id() {
        assert_eq!(entity_id("cafe.naver.com", "cafe"), None);
        assert_eq!(entity_id("", "cafe"), None);
    }

    #[test]
    fn adds_column_and_keeps_others() {
        let frame = Frame::new(vec![
            Column::text("url", ["https://cafe.naver.com/a/1", "https://cafe.naver.com/b/2"]),
            Column::text("text", ["x", "y"]),
        ])
        .unwrap();
        let out = extract_entity(&frame, "url", &EntityRule::default()).unwrap();
        assert_eq!(out.column_names(), vec!["url", "text", "entity"]);
        assert_eq!(
            out.column("entity").unwrap().values(),
            &[Value::from("cafe.naver.com/a"), Value::from("cafe.naver.com/b")]
        );
    }

    #[test]
    fn one_bad_url_fails_everything() {
        let frame = Frame::new(vec![Column::text(
            "url",
            ["https://cafe.naver.com/myroom/123", "https://blog.naver.com/x/1"],
        )])
        .unwrap();
        let err = extract_entity(&frame, "url", &EntityRule::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err, FrameError::UrlDomain { row: 1, .. }));
    }

    #[test]
    fn null_url_fails() {
        let frame = Frame::new(vec![Column::new("url", vec![Value::Null])]).unwrap();
        assert!(extract_entity(&frame, "url", &EntityRule::default()).is_err());
    }

    #[test]
    fn existing_output_column_is_rejected() {
        let frame = Frame::new(vec![
            Column::text("url", ["https://cafe.naver.com/a/1"]),
            Column::text("entity", ["kept"]),
        ])
        .unwrap();
        let err = extract_entity(&frame, "url", &EntityRule::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);

        let onto_url = EntityRule {
            output_column: "url".into(),
            ..EntityRule::default()
        };
        assert!(matches!(
            extract_entity(&frame, "url", &onto_url).unwrap_err(),
            FrameError::DuplicateColumn { ref column } if column == "url"
        ));
    }

    #[test]
    fn custom_rule() {
        let frame = Frame::new(vec![Column::text("url", ["https://blog.naver.com/x/1"])]).unwrap();
        let rule = EntityRule {
            marker: "blog".into(),
            output_column: "blog".into(),
        };
        let out = extract_entity(&frame, "url", &rule).unwrap();
        assert_eq!(out.column("blog").unwrap().get(0), Some(&Value::from("blog.naver.com/x")));
    }
}
