//! # inventory-core: Pure Business Logic for the Inventory Service
//!
//! This crate is the **heart** of the inventory service. It contains the
//! query-and-aggregation engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Service Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    POST /products ──► GET /products ──► GET /products/metrics   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                inventory-store (Catalog)                        │   │
//! │  │          create / update / delete / set_stock / snapshot        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inventory-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   query   │  │  metrics  │  │ validation│  │   │
//! │  │   │  Product  │  │  filter   │  │  totals   │  │   rules   │  │   │
//! │  │   │  Draft    │  │ sort/page │  │ by cat.   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, NewProduct)
//! - [`query`] - Filtering, two-key sorting and pagination
//! - [`metrics`] - Stock/value/price aggregates, overall and per category
//! - [`validation`] - Field rules for incoming product bodies
//! - [`clock`] - Source of the current calendar date
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::query::{ProductQuery, SortDirection, SortField, SortKey};
//!
//! let query = ProductQuery::default()
//!     .sort_by(SortKey::new(SortField::UnitPrice, SortDirection::Descending))
//!     .then_by(SortKey::new(SortField::Name, SortDirection::Ascending));
//!
//! let page = query.run(&[]);
//! assert!(page.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod metrics;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock};
pub use error::{ValidationError, ValidationErrors};
pub use metrics::{CategoryMetrics, InventoryMetrics};
pub use query::{PageRequest, ProductFilter, ProductQuery, SortDirection, SortField, SortKey};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LENGTH: usize = 120;

/// Page size used when a client does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quantity applied by "mark in stock" when no quantity is given.
pub const DEFAULT_RESTOCK_QUANTITY: i64 = 10;
