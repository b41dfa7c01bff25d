//! Issue status listing endpoint
//!
//! Serves the fixed status table of the real tracker. The table is defined
//! once at compile time and never mutated, so the listing is pure: any
//! request for the resource gets byte-identical JSON.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

/// One status an issue can hold
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IssueStatus {
    pub id: u32,
    pub name: &'static str,
}

/// The canned status table, in the declaration order the real API returns
pub const ISSUE_STATUSES: [IssueStatus; 4] = [
    IssueStatus { id: 1, name: "Solved" },
    IssueStatus { id: 2, name: "Rejected" },
    IssueStatus { id: 3, name: "In Progress" },
    IssueStatus { id: 4, name: "Interrupted" },
];

/// Wire shape of the listing document
#[derive(Serialize)]
struct StatusListDocument<'a> {
    issue_statuses: &'a [IssueStatus],
}

/// Handle `GET /issue_statuses.json`
pub fn list_statuses() -> Response<Full<Bytes>> {
    http::build_json_response(&StatusListDocument {
        issue_statuses: &ISSUE_STATUSES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_table_has_four_statuses_in_order() {
        assert_eq!(ISSUE_STATUSES.len(), 4);
        let ids: Vec<u32> = ISSUE_STATUSES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let names: Vec<&str> = ISSUE_STATUSES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Solved", "Rejected", "In Progress", "Interrupted"]);
    }

    #[tokio::test]
    async fn test_listing_returns_exact_document() {
        let resp = list_statuses();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &body[..],
            br#"{"issue_statuses":[{"id":1,"name":"Solved"},{"id":2,"name":"Rejected"},{"id":3,"name":"In Progress"},{"id":4,"name":"Interrupted"}]}"#
        );
    }

    #[tokio::test]
    async fn test_listing_is_stable_across_calls() {
        let first = list_statuses().into_body().collect().await.unwrap().to_bytes();
        let second = list_statuses().into_body().collect().await.unwrap().to_bytes();
        assert_eq!(first, second);
    }
}
