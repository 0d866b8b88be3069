//! # Store Error Types
//!
//! Error types for catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (inventory-core)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the not-found case                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← 400 field map / 404 empty body               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{ValidationError, ValidationErrors};
use thiserror::Error;

/// Catalog operation errors.
///
/// Every catalog operation either fully succeeds or fails with one of
/// these two kinds; nothing is partially applied.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live record with this id.
    ///
    /// ## When This Occurs
    /// - The id was never assigned
    /// - The record was deleted
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: u64 },

    /// Input rejected before the catalog was touched.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl StoreError {
    /// Creates a NotFound error for a product id.
    pub fn product_not_found(id: u64) -> Self {
        StoreError::NotFound {
            entity: "Product".to_string(),
            id,
        }
    }

    /// Returns true for the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err.into())
    }
}

/// Result type for catalog operations.
pub type StoreResult<T> = Result<T, StoreError>;
