//! # Catalog
//!
//! The ordered, in-memory collection of products and every mutation of it.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │                                                                         │
//! │  products: Vec<Product>   (insertion order)                            │
//! │  ┌────────┬────────┬────────┬────────┐                                 │
//! │  │ id: 1  │ id: 2  │ id: 4  │ id: 5  │   ← id 3 was deleted            │
//! │  └────────┴────────┴────────┴────────┘                                 │
//! │                                                                         │
//! │  next_id: 6               (strictly increasing, never rewound)         │
//! │  clock:   Arc<dyn Clock>  (stamps createdAt / updatedAt)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups are linear scans. The catalog is synchronous and owns its data;
//! [`SharedCatalog`](crate::SharedCatalog) adds the lock.

use std::fmt;
use std::sync::Arc;

use inventory_core::validation::validate_restock_quantity;
use inventory_core::{Clock, NewProduct, Product};
use tracing::{debug, info};

use crate::clock::SystemClock;
use crate::error::{StoreError, StoreResult};

/// The product catalog.
///
/// ## Usage
/// ```rust
/// use inventory_core::NewProduct;
/// use inventory_store::Catalog;
///
/// let mut catalog = Catalog::new();
/// let pepsi = catalog.create(NewProduct {
///     name: "Pepsi".to_string(),
///     category: "Drink".to_string(),
///     unit_price: 11.0,
///     quantity_in_stock: 15,
///     expiration_date: None,
/// });
/// assert_eq!(pepsi.id, 1);
/// assert_eq!(catalog.len(), 1);
/// ```
pub struct Catalog {
    products: Vec<Product>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl Catalog {
    /// Creates an empty catalog stamped by the system clock.
    pub fn new() -> Self {
        Catalog::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty catalog stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Catalog {
            products: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Stores a validated product under the next id.
    pub fn create(&mut self, fields: NewProduct) -> Product {
        let id = self.next_id;
        self.next_id += 1;

        let product = Product::from_new(id, fields, self.clock.today());
        self.products.push(product.clone());

        info!(id, name = %product.name, category = %product.category, "Product created");
        product
    }

    /// Replaces the mutable fields of product `id`.
    pub fn update(&mut self, id: u64, fields: NewProduct) -> StoreResult<Product> {
        let today = self.clock.today();
        let product = self.find_mut(id)?;
        product.apply(fields, today);

        info!(id, "Product updated");
        Ok(product.clone())
    }

    /// Removes product `id` and returns it.
    pub fn delete(&mut self, id: u64) -> StoreResult<Product> {
        let index = self.position(id)?;
        // remove (not swap_remove): insertion order is observable
        let removed = self.products.remove(index);

        info!(id, "Product deleted");
        Ok(removed)
    }

    /// Sets the stock level of product `id`.
    ///
    /// A negative quantity fails validation before the catalog is touched.
    pub fn set_stock(&mut self, id: u64, quantity: i64) -> StoreResult<Product> {
        let quantity = validate_restock_quantity(quantity)?;
        let today = self.clock.today();
        let product = self.find_mut(id)?;
        product.set_stock(quantity, today);

        info!(id, quantity, "Product marked in stock");
        Ok(product.clone())
    }

    /// Sets the stock level of product `id` to zero.
    pub fn clear_stock(&mut self, id: u64) -> StoreResult<Product> {
        let today = self.clock.today();
        let product = self.find_mut(id)?;
        product.set_stock(0, today);

        info!(id, "Product marked out of stock");
        Ok(product.clone())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns a copy of product `id`.
    pub fn get(&self, id: u64) -> StoreResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Owned copy of every product, in insertion order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn position(&self, id: u64) -> StoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    fn find_mut(&mut self, id: u64) -> StoreResult<&mut Product> {
        let index = self.position(id)?;
        Ok(&mut self.products[index])
    }
}

fn not_found(id: u64) -> StoreError {
    debug!(id, "Product not found");
    StoreError::product_not_found(id)
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.products.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use inventory_core::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields(name: &str, category: &str, price: f64, qty: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            unit_price: price,
            quantity_in_stock: qty,
            expiration_date: None,
        }
    }

    fn catalog_at(day: NaiveDate) -> (Catalog, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(day));
        (Catalog::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (mut catalog, _) = catalog_at(date(2026, 3, 1));
        let pepsi = catalog.create(fields("Pepsi", "Drink", 11.0, 15));
        let chips = catalog.create(fields("Chips", "Snack", 3.5, 0));

        assert_eq!(pepsi.id, 1);
        assert_eq!(chips.id, 2);
        assert_eq!(pepsi.created_at, date(2026, 3, 1));
        assert_eq!(pepsi.updated_at, date(2026, 3, 1));
        assert_eq!(catalog.get(2).unwrap(), chips);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (mut catalog, _) = catalog_at(date(2026, 3, 1));
        let first = catalog.create(fields("A", "X", 1.0, 1));
        catalog.delete(first.id).unwrap();
        let second = catalog.create(fields("B", "X", 1.0, 1));

        assert_eq!(second.id, 2);
        assert!(catalog.get(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_keeps_insertion_order() {
        let (mut catalog, _) = catalog_at(date(2026, 3, 1));
        for name in ["A", "B", "C", "D"] {
            catalog.create(fields(name, "X", 1.0, 1));
        }
        let removed = catalog.delete(2).unwrap();
        assert_eq!(removed.name, "B");

        let ids: Vec<u64> = catalog.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(catalog.delete(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let (mut catalog, clock) = catalog_at(date(2026, 3, 1));
        catalog.create(fields("Pepsi", "Drink", 11.0, 15));

        clock.advance_days(2);
        let updated = catalog
            .update(1, fields("Pepsi Max", "Drink", 12.0, 20))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Pepsi Max");
        assert_eq!(updated.unit_price, 12.0);
        assert_eq!(updated.quantity_in_stock, 20);
        assert_eq!(updated.created_at, date(2026, 3, 1));
        assert_eq!(updated.updated_at, date(2026, 3, 3));
        assert_eq!(catalog.get(1).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id() {
        let (mut catalog, _) = catalog_at(date(2026, 3, 1));
        let err = catalog.update(42, fields("A", "X", 1.0, 1)).unwrap_err();
        assert!(err.is_not_found());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_set_and_clear_stock() {
        let (mut catalog, clock) = catalog_at(date(2026, 3, 1));
        catalog.create(fields("Chips", "Snack", 3.5, 0));

        clock.advance_days(1);
        let stocked = catalog.set_stock(1, 10).unwrap();
        assert_eq!(stocked.quantity_in_stock, 10);
        assert_eq!(stocked.updated_at, date(2026, 3, 2));
        assert_eq!(stocked.name, "Chips");

        let cleared = catalog.clear_stock(1).unwrap();
        assert_eq!(cleared.quantity_in_stock, 0);
    }

    #[test]
    fn test_set_stock_rejects_negative_before_lookup() {
        let (mut catalog, _) = catalog_at(date(2026, 3, 1));
        catalog.create(fields("Chips", "Snack", 3.5, 4));

        match catalog.set_stock(1, -1) {
            Err(StoreError::Validation(errors)) => {
                assert_eq!(errors.get("quantity"), Some("quantity cannot be negative"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        // unknown id with a bad quantity is still a validation failure
        assert!(matches!(
            catalog.set_stock(99, -1),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(catalog.get(1).unwrap().quantity_in_stock, 4);
    }

    #[test]
    fn test_clock_behind_does_not_precede_created_at() {
        let (mut catalog, clock) = catalog_at(date(2026, 3, 10));
        catalog.create(fields("A", "X", 1.0, 1));

        clock.set(date(2026, 3, 1));
        let product = catalog.clear_stock(1).unwrap();
        assert_eq!(product.updated_at, date(2026, 3, 10));
    }
}
