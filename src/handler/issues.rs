//! Issue update endpoint
//!
//! Accepts `PUT /issues/:id.json` and acknowledges it without doing anything.
//! The `:id` capture and the payload are recorded by the request log but
//! never validated or acted on. A test double has to accept whatever the
//! client under test sends.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Extract the `:id` capture from an `/issues/:id.json` path
///
/// The capture is a single path segment and may be empty; it is never
/// interpreted. Paths with extra segments do not match.
pub fn issue_id_capture(path: &str) -> Option<&str> {
    let id = path.strip_prefix("/issues/")?.strip_suffix(".json")?;
    if id.contains('/') {
        return None;
    }
    Some(id)
}

/// Handle `PUT /issues/:id.json`
///
/// Mirrors the real API's acknowledgement shape: 200, no headers, empty body.
pub fn update_issue(_id: &str) -> Response<Full<Bytes>> {
    http::build_empty_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_capture_numeric_id() {
        assert_eq!(issue_id_capture("/issues/42.json"), Some("42"));
    }

    #[test]
    fn test_capture_is_permissive() {
        assert_eq!(issue_id_capture("/issues/abc-123.json"), Some("abc-123"));
        assert_eq!(issue_id_capture("/issues/.json"), Some(""));
    }

    #[test]
    fn test_capture_rejects_other_shapes() {
        assert_eq!(issue_id_capture("/issues/42"), None);
        assert_eq!(issue_id_capture("/issues/42/relations.json"), None);
        assert_eq!(issue_id_capture("/issue_statuses.json"), None);
    }

    #[tokio::test]
    async fn test_update_acknowledges_with_empty_response() {
        let resp = update_issue("42");
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().is_empty());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
