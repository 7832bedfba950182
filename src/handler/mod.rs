//! Request handler module
//!
//! Resolves request paths against the route table and produces canned
//! responses.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
