//! Request parameter capture
//!
//! Collects everything a request carried as "parameters": path captures from
//! the matched route, query string pairs, and the top-level fields of a JSON
//! body. The request log records one entry per request with this capture,
//! whether or not any handler looked at it.

use serde_json::Value;

/// Parameters captured from a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// Path captures from the matched route (e.g. `id` for `/issues/:id.json`)
    pub captures: Vec<(String, String)>,
    /// Query string pairs, in request order
    pub query: Vec<(String, String)>,
    /// Top-level fields of a JSON object body, in document order
    pub body: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new(
        captures: Vec<(String, String)>,
        query: Option<&str>,
        body: &[u8],
    ) -> Self {
        Self {
            captures,
            query: query.map(parse_query).unwrap_or_default(),
            body: parse_body_fields(body),
        }
    }

    /// Render all captured parameters as a single `{key=value, ...}` token
    /// for plain-text log lines. Zero parameters render as `{}`.
    pub fn render(&self) -> String {
        let pairs: Vec<String> = self
            .captures
            .iter()
            .chain(&self.query)
            .chain(&self.body)
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }

    /// Render as a JSON object for structured log lines
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (k, v) in self.captures.iter().chain(&self.query).chain(&self.body) {
            map.insert(k.clone(), Value::String(v.clone()));
        }
        Value::Object(map)
    }
}

/// Split a raw query string into pairs
///
/// A bare key without `=` captures as an empty value. No percent-decoding:
/// the double logs what was on the wire.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (part.to_string(), String::new()),
        })
        .collect()
}

/// Extract top-level fields from a JSON object body
///
/// Anything that is not a JSON object (empty body, arrays, scalars, invalid
/// JSON) captures as no parameters. The double never rejects a payload over
/// its shape.
pub fn parse_body_fields(body: &[u8]) -> Vec<(String, String)> {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return Vec::new();
    };

    map.into_iter()
        .map(|(k, v)| match v {
            Value::String(s) => (k, s),
            other => (k, other.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pairs() {
        let pairs = parse_query("status_id=3&assigned_to=me");
        assert_eq!(
            pairs,
            vec![
                ("status_id".to_string(), "3".to_string()),
                ("assigned_to".to_string(), "me".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_bare_key_and_empty_parts() {
        let pairs = parse_query("flag&&x=1");
        assert_eq!(
            pairs,
            vec![
                ("flag".to_string(), String::new()),
                ("x".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_body_fields_object() {
        let fields = parse_body_fields(br#"{"status":"closed","done_ratio":100}"#);
        assert!(fields.contains(&("status".to_string(), "closed".to_string())));
        assert!(fields.contains(&("done_ratio".to_string(), "100".to_string())));
    }

    #[test]
    fn test_parse_body_fields_non_object() {
        assert!(parse_body_fields(b"").is_empty());
        assert!(parse_body_fields(b"[1,2,3]").is_empty());
        assert!(parse_body_fields(b"not json").is_empty());
    }

    #[test]
    fn test_render_zero_parameters() {
        let params = RequestParams::new(Vec::new(), None, b"");
        assert_eq!(params.render(), "{}");
    }

    #[test]
    fn test_render_merges_all_sources() {
        let params = RequestParams::new(
            vec![("id".to_string(), "42".to_string())],
            Some("notify=false"),
            br#"{"status":"closed"}"#,
        );
        assert_eq!(params.render(), "{id=42, notify=false, status=closed}");
    }

    #[test]
    fn test_to_json_object() {
        let params = RequestParams::new(
            vec![("id".to_string(), "42".to_string())],
            None,
            br#"{"status":"closed"}"#,
        );
        let json = params.to_json();
        assert_eq!(json["id"], "42");
        assert_eq!(json["status"], "closed");
    }
}
