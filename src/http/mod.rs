//! HTTP response layer
//!
//! Response builders decoupled from routing and business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_direct_response, build_html_response,
};
