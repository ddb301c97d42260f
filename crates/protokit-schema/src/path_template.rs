//! URL path-template variables.
//!
//! Recognized placeholders, each starting a `/`-delimited segment:
//!
//! - `{name}`
//! - `{name:pattern}` (custom-verb style suffix, discarded)
//! - `{name=capture/*}` (capture pattern, discarded; may contain `/`)
//!
//! Text after a closing `}` in the same segment (e.g. `{name}:cancel`) is
//! ignored, as are braces that do not open a segment.

use crate::error::{Result, SchemaError};

/// Variable names referenced by `template`, in order of appearance.
///
/// Duplicates are kept. A placeholder without a closing `}`, with an empty
/// name, or with a `/` inside its name is rejected with
/// [`SchemaError::MalformedPathTemplate`].
pub fn parse_path_variables(template: &str) -> Result<Vec<String>> {
    let bytes = template.as_bytes();
    let mut vars = Vec::new();
    let mut i = 0usize;
    let mut segment_start = true;

    while i < bytes.len() {
        match bytes[i] {
            b'/' => {
                segment_start = true;
                i += 1;
            }
            b'{' if segment_start => {
                let (name, next) = placeholder(template, i)?;
                vars.push(name.to_string());
                i = next;
                segment_start = false;
            }
            _ => {
                segment_start = false;
                i += 1;
            }
        }
    }

    Ok(vars)
}

/// Parse the placeholder opening at `open`; returns its name and the index
/// just past the closing `}`.
fn placeholder(template: &str, open: usize) -> Result<(&str, usize)> {
    let bytes = template.as_bytes();
    let malformed = |offset: usize, reason: &'static str| SchemaError::MalformedPathTemplate {
        template: template.to_string(),
        offset,
        reason,
    };

    let name_start = open + 1;
    let mut end = name_start;
    while end < bytes.len() && !matches!(bytes[end], b':' | b'=' | b'}' | b'/') {
        end += 1;
    }

    match bytes.get(end).copied() {
        None => return Err(malformed(open, "unterminated '{'")),
        Some(b'/') => return Err(malformed(end, "'/' inside variable name")),
        _ => {}
    }
    if end == name_start {
        return Err(malformed(open, "empty variable name"));
    }
    let name = &template[name_start..end];

    let close = template[end..]
        .find('}')
        .map(|rel| end + rel)
        .ok_or_else(|| malformed(open, "unterminated '{'"))?;

    Ok((name, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(t: &str) -> Vec<String> {
        parse_path_variables(t).unwrap()
    }

    #[test]
    fn simple_variables_in_order() {
        assert_eq!(
            vars("/v1/{user_id}/messages/{message_id}"),
            ["user_id", "message_id"]
        );
        assert_eq!(vars("/{a}/{b}"), ["a", "b"]);
    }

    #[test]
    fn suffixes_are_discarded() {
        assert_eq!(vars("/v1/{name:get}"), ["name"]);
        assert_eq!(vars("/v1/{name=threads/*}"), ["name"]);
        assert_eq!(
            vars("/v1/{user_id}/messages/{message_id=messages/*}"),
            ["user_id", "message_id"]
        );
        assert_eq!(vars("/v1/{name=shelves/*/books/**}:publish"), ["name"]);
        assert_eq!(vars("/v1/{name}:cancel"), ["name"]);
    }

    #[test]
    fn no_variables() {
        assert!(vars("").is_empty());
        assert!(vars("/").is_empty());
        assert!(vars("/v1/health").is_empty());
        assert!(vars("//v1//status//").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(vars("/{id}/x/{id}"), ["id", "id"]);
    }

    #[test]
    fn braces_inside_a_segment_are_ignored() {
        assert_eq!(vars("/v1/prefix{id}/{name}"), ["name"]);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(vars("{a}/b/{c}"), ["a", "c"]);
    }

    #[test]
    fn malformed_placeholders_are_rejected() {
        for (template, offset) in [
            ("/v1/{name", 4),
            ("/v1/{name=threads/*", 4),
            ("/v1/{}", 4),
            ("/v1/{a/b}", 6),
        ] {
            match parse_path_variables(template) {
                Err(SchemaError::MalformedPathTemplate {
                    template: t,
                    offset: o,
                    ..
                }) => {
                    assert_eq!(t, template);
                    assert_eq!(o, offset, "offset for {template}");
                }
                other => panic!("expected MalformedPathTemplate for {template}, got {other:?}"),
            }
        }
    }
}
