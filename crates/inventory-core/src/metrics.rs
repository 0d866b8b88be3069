//! # Metrics Aggregator
//!
//! Stock, value and price aggregates over a catalog snapshot, overall and
//! per category.
//!
//! ## Definitions
//! ```text
//! totalStock = Σ quantityInStock
//! totalValue = Σ unitPrice × quantityInStock
//! avgPrice   = mean(unitPrice) over products with quantityInStock > 0
//!              (0.0 when there are none)
//! ```
//!
//! Categories are discovered from the data in a single pass; there is no
//! fixed category list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Output Types
// =============================================================================

/// Aggregates for one category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryMetrics {
    pub total_stock: i64,
    pub total_value: f64,
    pub avg_price: f64,
}

/// Aggregates for the whole catalog plus a breakdown by category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryMetrics {
    pub total_stock: i64,
    pub total_value: f64,
    pub avg_price: f64,
    /// Keyed by category name, sorted.
    pub by_category: BTreeMap<String, CategoryMetrics>,
}

impl InventoryMetrics {
    /// Computes every metric over `snapshot`.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::InventoryMetrics;
    ///
    /// let metrics = InventoryMetrics::compute(&[]);
    /// assert_eq!(metrics.total_stock, 0);
    /// assert_eq!(metrics.avg_price, 0.0);
    /// assert!(metrics.by_category.is_empty());
    /// ```
    pub fn compute(snapshot: &[Product]) -> Self {
        let mut overall = Accumulator::default();
        let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();

        for product in snapshot {
            overall.add(product);
            groups
                .entry(product.category.as_str())
                .or_default()
                .add(product);
        }

        let totals = overall.finish();
        InventoryMetrics {
            total_stock: totals.total_stock,
            total_value: totals.total_value,
            avg_price: totals.avg_price,
            by_category: groups
                .into_iter()
                .map(|(category, acc)| (category.to_string(), acc.finish()))
                .collect(),
        }
    }
}

// =============================================================================
// Accumulator
// =============================================================================

/// Running sums for one group.
#[derive(Debug, Default)]
struct Accumulator {
    total_stock: i64,
    total_value: f64,
    stocked_price_sum: f64,
    stocked_count: u64,
}

impl Accumulator {
    fn add(&mut self, product: &Product) {
        self.total_stock = self.total_stock.saturating_add(product.quantity_in_stock);
        self.total_value += product.stock_value();
        if product.in_stock() {
            self.stocked_price_sum += product.unit_price;
            self.stocked_count += 1;
        }
    }

    fn finish(self) -> CategoryMetrics {
        let avg_price = if self.stocked_count == 0 {
            0.0
        } else {
            self.stocked_price_sum / self.stocked_count as f64
        };
        CategoryMetrics {
            total_stock: self.total_stock,
            total_value: self.total_value,
            avg_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
