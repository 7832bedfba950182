// Application state module
// Read-only state shared across all connection tasks

use std::sync::atomic::AtomicBool;

use hyper::body::Bytes;
use tokio::fs;

use super::types::Config;
use crate::logger;
use crate::routes::RouteTable;

/// Shared application state
///
/// Built once at startup and never mutated afterwards, so request handlers
/// can read it without locking.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    /// Index page bytes, loaded once at startup. `None` when the backing
    /// file was missing or unreadable; requests for it answer 500.
    pub index_page: Option<Bytes>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Load the index page and build the shared state
    pub async fn new(config: Config) -> Self {
        let index_page = match fs::read(&config.http.index_path).await {
            Ok(content) => Some(Bytes::from(content)),
            Err(e) => {
                logger::log_warning(&format!(
                    "Index page '{}' not available: {e}",
                    config.http.index_path
                ));
                None
            }
        };

        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config,
            routes: RouteTable::builtin(),
            index_page,
            cached_access_log,
        }
    }
}
