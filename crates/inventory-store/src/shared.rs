//! # Shared Catalog
//!
//! A cloneable handle to one process-wide [`Catalog`].
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Arc<RwLock<Catalog>>                                   │
//! │                                                                         │
//! │  create / update / delete / set_stock / clear_stock                    │
//! │       │  write lock, held for the whole mutation                       │
//! │       ▼                                                                 │
//! │  ┌───────────┐                                                          │
//! │  │  Catalog  │                                                          │
//! │  └───────────┘                                                          │
//! │       ▲                                                                 │
//! │       │  read lock, released once the snapshot is cloned               │
//! │  get / snapshot / query / metrics / len                                │
//! │                                                                         │
//! │  Query and metrics math runs on the clone, outside the lock.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use inventory_core::{Clock, InventoryMetrics, NewProduct, Product, ProductQuery};
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::StoreResult;

/// Handle to the process-wide catalog.
///
/// Cloning the handle shares the same catalog.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = SharedCatalog::new();
///
/// let pepsi = catalog.create(new_product).await;
/// let page = catalog.query(&query).await;
/// let metrics = catalog.metrics().await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    /// Creates an empty catalog stamped by the system clock.
    pub fn new() -> Self {
        SharedCatalog::from_catalog(Catalog::new())
    }

    /// Creates an empty catalog stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        SharedCatalog::from_catalog(Catalog::with_clock(clock))
    }

    /// Wraps an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        SharedCatalog {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    // =========================================================================
    // Mutations (write lock)
    // =========================================================================

    pub async fn create(&self, fields: NewProduct) -> Product {
        self.inner.write().await.create(fields)
    }

    pub async fn update(&self, id: u64, fields: NewProduct) -> StoreResult<Product> {
        self.inner.write().await.update(id, fields)
    }

    pub async fn delete(&self, id: u64) -> StoreResult<Product> {
        self.inner.write().await.delete(id)
    }

    pub async fn set_stock(&self, id: u64, quantity: i64) -> StoreResult<Product> {
        self.inner.write().await.set_stock(id, quantity)
    }

    pub async fn clear_stock(&self, id: u64) -> StoreResult<Product> {
        self.inner.write().await.clear_stock(id)
    }

    // =========================================================================
    // Reads (read lock)
    // =========================================================================

    pub async fn get(&self, id: u64) -> StoreResult<Product> {
        self.inner.read().await.get(id)
    }

    /// Every product, in insertion order.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.inner.read().await.snapshot()
    }

    /// Runs `query` against a fresh snapshot.
    pub async fn query(&self, query: &ProductQuery) -> Vec<Product> {
        let snapshot = self.snapshot().await;
        let page = query.run(&snapshot);
        debug!(
            matched_from = snapshot.len(),
            returned = page.len(),
            "Product query executed"
        );
        page
    }

    /// Computes metrics over a fresh snapshot.
    pub async fn metrics(&self) -> InventoryMetrics {
        let snapshot = self.snapshot().await;
        InventoryMetrics::compute(&snapshot)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
