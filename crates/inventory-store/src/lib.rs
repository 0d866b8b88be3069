//! # inventory-store: In-Memory Catalog for the Inventory Service
//!
//! This crate holds the live product catalog. It assigns ids, stamps dates
//! and applies every mutation; the query and metrics math lives in
//! `inventory-core` and runs against snapshots taken here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Service Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (GET /products, PUT /products/{id}, ...)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────┐          ┌─────────────────────────┐     │   │
//! │  │   │  SharedCatalog  │          │        Catalog          │     │   │
//! │  │   │   (shared.rs)   │          │      (catalog.rs)       │     │   │
//! │  │   │                 │          │                         │     │   │
//! │  │   │ Arc<RwLock<..>> │─────────►│ Vec<Product>, next_id   │     │   │
//! │  │   │ async methods   │          │ Clock                   │     │   │
//! │  │   └─────────────────┘          └─────────────────────────┘     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ snapshot                                                        │
//! │       ▼                                                                 │
//! │  inventory-core: ProductQuery::run / InventoryMetrics::compute         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - The owned collection and its mutations
//! - [`shared`] - Lock-wrapped handle shared across request handlers
//! - [`clock`] - System-date clock used outside tests
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_store::SharedCatalog;
//!
//! let catalog = SharedCatalog::new();
//! let product = catalog.create(new_product).await;
//! let restocked = catalog.set_stock(product.id, 10).await?;
//! let metrics = catalog.metrics().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod clock;
pub mod error;
pub mod shared;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use clock::SystemClock;
pub use error::{StoreError, StoreResult};
pub use shared::SharedCatalog;
