//! HTTP response building module
//!
//! Builders for the fixed set of responses the server emits. Every builder
//! declares a Content-Length equal to the exact byte length of the body it
//! writes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the 200 response carrying the index page
pub fn build_html_response(content: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=UTF-8")
        .header("Content-Length", content.len())
        .body(Full::new(content))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a direct response with a static body
pub fn build_direct_response(
    status: u16,
    body: &'static str,
    content_type: &str,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("direct", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    const BODY: &str = "404 Not Found";
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", BODY.len())
        .body(Full::new(Bytes::from_static(BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 response for a missing or unreadable index page
pub fn build_500_response() -> Response<Full<Bytes>> {
    const BODY: &str = "index.html not found";
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .header("Content-Length", BODY.len())
        .body(Full::new(Bytes::from_static(BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
