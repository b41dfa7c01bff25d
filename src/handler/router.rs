//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body collection, route matching,
//! handler dispatch, and the post-handling request log hook. The log hook
//! runs for every request the dispatcher answers, including 404s, so the log
//! carries one entry per handled request.

use crate::config::Config;
use crate::handler::params::RequestParams;
use crate::handler::{issues, statuses};
use crate::http;
use crate::logger::{self, RequestLogEntry};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{HeaderMap, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Route decision for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /issue_statuses.json`
    ListStatuses,
    /// `PUT /issues/:id.json`
    UpdateIssue { id: String },
    /// Anything else
    NotFound,
}

/// Match method and path to a route
pub fn match_route(method: &Method, path: &str) -> Route {
    if *method == Method::GET && path == "/issue_statuses.json" {
        return Route::ListStatuses;
    }

    if *method == Method::PUT {
        if let Some(id) = issues::issue_id_capture(path) {
            return Route::UpdateIssue { id: id.to_string() };
        }
    }

    Route::NotFound
}

/// Dispatch a matched route to its handler
fn dispatch(route: &Route) -> Response<Full<Bytes>> {
    match route {
        Route::ListStatuses => statuses::list_statuses(),
        Route::UpdateIssue { id } => issues::update_issue(id),
        Route::NotFound => http::build_404_response(),
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();
    let query = parts.uri.query().map(ToString::to_string);

    // 1. Check declared body size before buffering anything
    if let Some(resp) = check_body_size(&parts.headers, config.http.max_body_size) {
        let params = RequestParams::new(Vec::new(), query.as_deref(), b"");
        log_handled(&parts, &peer_addr, &resp, params, &config);
        return Ok(resp);
    }

    // 2. Collect the body for parameter capture.
    //    A body that fails to read is treated as absent; the double stays
    //    permissive either way.
    let body_bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Bytes::new()
        }
    };

    // 3. Match and dispatch
    let route = match_route(&parts.method, parts.uri.path());
    let response = dispatch(&route);

    // 4. Post-handling hook: record the request's parameters
    let captures = match &route {
        Route::UpdateIssue { id } => vec![("id".to_string(), id.clone())],
        _ => Vec::new(),
    };
    let params = RequestParams::new(captures, query.as_deref(), &body_bytes);
    log_handled(&parts, &peer_addr, &response, params, &config);

    Ok(response)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Record one request-log entry for a handled request
fn log_handled(
    parts: &Parts,
    peer_addr: &SocketAddr,
    response: &Response<Full<Bytes>>,
    params: RequestParams,
    config: &Config,
) {
    if !config.logging.access_log {
        return;
    }

    let mut entry = RequestLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_str(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response_body_len(response);
    entry.referer = header_str(&parts.headers, "referer");
    entry.user_agent = header_str(&parts.headers, "user-agent");
    entry.params = params;

    logger::log_request(&entry, &config.logging.access_log_format);
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_str(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

/// Exact size of a `Full` response body
fn response_body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(0)
}
