//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: reads the request path, resolves
//! it against the route table, and emits the matching response. The method
//! and headers play no part in routing; every method is accepted and
//! answered identically.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routes::RouteAction;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = route_response(&path, &state);

    if state.cached_access_log.load(Ordering::Relaxed) {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method, path);
        entry.query = query;
        entry.http_version = http_version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = declared_body_bytes(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve a path to its response
///
/// Stateless apart from the read-only `AppState`; every request is
/// independent.
pub fn route_response(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match state.routes.lookup(path) {
        Some(RouteAction::IndexPage) => match &state.index_page {
            Some(page) => http::build_html_response(page.clone()),
            None => http::build_500_response(),
        },
        Some(RouteAction::Direct {
            status,
            body,
            content_type,
        }) => {
            let content_type = match content_type {
                Some(ct) => *ct,
                None => state.config.http.default_content_type.as_str(),
            };
            http::build_direct_response(*status, body, content_type)
        }
        None => http::build_404_response(),
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

/// Read back the Content-Length the builder declared
fn declared_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes::{RouteTable, VERSION_BODY};
    use http_body_util::BodyExt;
    use std::sync::atomic::AtomicBool;

    fn test_state(index_page: Option<Bytes>) -> AppState {
        let config = Config::load_from("no-such-config-file").expect("defaults should load");
        AppState {
            config,
            routes: RouteTable::builtin(),
            index_page,
            cached_access_log: AtomicBool::new(false),
        }
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes()
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state(Some(Bytes::from_static(b"<html></html>")));
        let response = route_response("/health", &state);
        assert_eq!(response.status(), 200);
        assert_eq!(body_bytes(response).await, Bytes::from_static(b"OK"));
    }

    #[tokio::test]
    async fn test_version_body_byte_for_byte() {
        let state = test_state(Some(Bytes::from_static(b"<html></html>")));
        let response = route_response("/version", &state);
        assert_eq!(response.status(), 200);
        assert_eq!(
            body_bytes(response).await,
            Bytes::from(VERSION_BODY.as_bytes())
        );
    }

    #[tokio::test]
    async fn test_index_aliases_are_identical() {
        let page = Bytes::from_static(b"<html><body>welcome</body></html>");
        let state = test_state(Some(page.clone()));

        let root = route_response("/", &state);
        let alias = route_response("/index.html", &state);

        assert_eq!(root.status(), alias.status());
        assert_eq!(root.status(), 200);
        assert_eq!(
            root.headers()["content-type"],
            "text/html; charset=UTF-8"
        );
        let root_body = body_bytes(root).await;
        let alias_body = body_bytes(alias).await;
        assert_eq!(root_body, alias_body);
        assert_eq!(root_body, page);
    }

    #[tokio::test]
    async fn test_missing_index_answers_500() {
        let state = test_state(None);
        for path in ["/", "/index.html"] {
            let response = route_response(path, &state);
            assert_eq!(response.status(), 500);
            assert_eq!(
                body_bytes(response).await,
                Bytes::from_static(b"index.html not found")
            );
        }
    }

    #[tokio::test]
    async fn test_unmatched_paths_answer_404() {
        let state = test_state(Some(Bytes::from_static(b"<html></html>")));
        for path in ["/about", "/health/", "/api/version", "/favicon.ico"] {
            let response = route_response(path, &state);
            assert_eq!(response.status(), 404, "path {path}");
            assert_eq!(
                body_bytes(response).await,
                Bytes::from_static(b"404 Not Found")
            );
        }
    }

    #[tokio::test]
    async fn test_request_failures_stay_local() {
        // A missing index never panics the handler, it degrades per request
        let state = test_state(None);
        let ok = route_response("/health", &state);
        assert_eq!(ok.status(), 200);
        let broken = route_response("/", &state);
        assert_eq!(broken.status(), 500);
    }
}
