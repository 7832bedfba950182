//! Fixed route table
//!
//! Maps request paths to canned responses. The table is built once at
//! startup and never mutated; lookups are plain map reads, safe to share
//! across connection tasks.

use std::collections::HashMap;

/// Body served for `/health`.
pub const HEALTH_BODY: &str = "OK";

/// Body served for `/version`. The byte layout is part of the contract,
/// including field order and spacing.
pub const VERSION_BODY: &str =
    r#"{"version": "2.0", "color": "green", "features": ["Analytics", "Notifications"]}"#;

/// What to answer when a path matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Serve the index page loaded at startup
    IndexPage,
    /// Serve a fixed body as-is
    Direct {
        status: u16,
        body: &'static str,
        /// Falls back to the configured default when not set
        content_type: Option<&'static str>,
    },
}

/// Immutable path-to-action table
pub struct RouteTable {
    entries: HashMap<&'static str, RouteAction>,
}

impl RouteTable {
    /// Build the built-in table. `/` and `/index.html` are aliases.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert("/", RouteAction::IndexPage);
        entries.insert("/index.html", RouteAction::IndexPage);
        entries.insert(
            "/health",
            RouteAction::Direct {
                status: 200,
                body: HEALTH_BODY,
                content_type: None,
            },
        );
        entries.insert(
            "/version",
            RouteAction::Direct {
                status: 200,
                body: VERSION_BODY,
                content_type: None,
            },
        );
        Self { entries }
    }

    /// Exact-match lookup; the request method plays no part
    pub fn lookup(&self, path: &str) -> Option<&RouteAction> {
        self.entries.get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        let table = RouteTable::builtin();
        assert_eq!(table.lookup("/"), Some(&RouteAction::IndexPage));
        assert_eq!(table.lookup("/index.html"), Some(&RouteAction::IndexPage));
        assert_eq!(
            table.lookup("/health"),
            Some(&RouteAction::Direct {
                status: 200,
                body: HEALTH_BODY,
                content_type: None,
            })
        );
        assert_eq!(
            table.lookup("/version"),
            Some(&RouteAction::Direct {
                status: 200,
                body: VERSION_BODY,
                content_type: None,
            })
        );
    }

    #[test]
    fn test_aliases_share_action() {
        let table = RouteTable::builtin();
        assert_eq!(table.lookup("/"), table.lookup("/index.html"));
    }

    #[test]
    fn test_near_misses_do_not_resolve() {
        let table = RouteTable::builtin();
        assert!(table.lookup("/health/").is_none());
        assert!(table.lookup("/HEALTH").is_none());
        assert!(table.lookup("/index.htm").is_none());
        assert!(table.lookup("/version/2").is_none());
        assert!(table.lookup("/about").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_version_body_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(VERSION_BODY).expect("version body parses as JSON");
        assert_eq!(value["version"], "2.0");
        assert_eq!(value["color"], "green");
        assert_eq!(
            value["features"],
            serde_json::json!(["Analytics", "Notifications"])
        );
    }
}
