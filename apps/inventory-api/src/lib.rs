//! # Inventory API
//!
//! HTTP/JSON front end for the product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory API                                   │
//! │                                                                         │
//! │  Client ───► axum Router ───► handlers ───► SharedCatalog              │
//! │                  │                │              │                      │
//! │                  │                │              ▼                      │
//! │           request logging    params / error   inventory-core           │
//! │             (tracing)          mapping        query + metrics          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `INVENTORY_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `INVENTORY_PORT` - HTTP port (default: 8080)
//! - `INVENTORY_DEFAULT_PAGE_SIZE` - List page size when none given (default: 10)
//! - `RUST_LOG` - Log filter (default: `info,inventory=debug`)

use std::sync::Arc;

use inventory_store::SharedCatalog;

pub mod config;
pub mod error;
pub mod params;
pub mod request_log;
pub mod routes;
pub mod shutdown;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::router;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(catalog: SharedCatalog, config: ApiConfig) -> Self {
        AppState {
            catalog,
            config: Arc::new(config),
        }
    }
}
