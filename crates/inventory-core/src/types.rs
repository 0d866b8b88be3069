//! # Domain Types
//!
//! Core domain types used throughout the inventory service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  validate  ┌─────────────────┐  store  ┌─────────┐ │
//! │  │  ProductDraft   │ ─────────► │   NewProduct    │ ──────► │ Product │ │
//! │  │  ─────────────  │            │  ─────────────  │         │ ─────── │ │
//! │  │  every field    │            │  checked fields │         │ + id    │ │
//! │  │  optional       │            │  no id / dates  │         │ + dates │ │
//! │  └─────────────────┘            └─────────────────┘         └─────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All types serialize with camelCase field names and ISO-8601 calendar
//! dates (`"2026-03-01"`), e.g.
//! ```json
//! {
//!   "id": 1,
//!   "name": "Pepsi",
//!   "category": "Drink",
//!   "unitPrice": 11.0,
//!   "quantityInStock": 15,
//!   "expirationDate": null,
//!   "createdAt": "2026-03-01",
//!   "updatedAt": "2026-03-01"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationErrors;
use crate::validation;

// =============================================================================
// Product
// =============================================================================

/// A product held in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Sequential identifier, assigned once and never reused.
    pub id: u64,

    /// Display name (1-120 characters).
    pub name: String,

    /// Free-form category label.
    pub category: String,

    /// Price per unit, strictly positive.
    pub unit_price: f64,

    /// Units on hand, never negative.
    pub quantity_in_stock: i64,

    /// Best-before date, if the product expires.
    #[ts(as = "Option<String>")]
    pub expiration_date: Option<NaiveDate>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: NaiveDate,

    /// When the product was last changed.
    /// Calendar-date granularity: several changes on one day look the same.
    #[ts(as = "String")]
    pub updated_at: NaiveDate,
}

impl Product {
    /// Builds a stored product from validated fields.
    pub fn from_new(id: u64, fields: NewProduct, today: NaiveDate) -> Self {
        Product {
            id,
            name: fields.name,
            category: fields.category,
            unit_price: fields.unit_price,
            quantity_in_stock: fields.quantity_in_stock,
            expiration_date: fields.expiration_date,
            created_at: today,
            updated_at: today,
        }
    }

    /// Overwrites the five mutable fields and refreshes `updated_at`.
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, fields: NewProduct, today: NaiveDate) {
        self.name = fields.name;
        self.category = fields.category;
        self.unit_price = fields.unit_price;
        self.quantity_in_stock = fields.quantity_in_stock;
        self.expiration_date = fields.expiration_date;
        self.touch(today);
    }

    /// Overwrites the stock level only.
    pub fn set_stock(&mut self, quantity: i64, today: NaiveDate) {
        self.quantity_in_stock = quantity;
        self.touch(today);
    }

    /// Whether any units are on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }

    /// Stock value of this product (`unit_price × quantity_in_stock`).
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.quantity_in_stock as f64
    }

    fn touch(&mut self, today: NaiveDate) {
        // a clock running behind must not push updated_at before created_at
        self.updated_at = today.max(self.created_at);
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// A product body as received from a client, before validation.
///
/// Every field is optional so that a missing field can be reported as
/// "`field` is required" alongside every other failing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub unit_price: Option<f64>,

    #[serde(default)]
    pub quantity_in_stock: Option<i64>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub expiration_date: Option<NaiveDate>,
}

impl ProductDraft {
    /// Checks every field rule and returns the validated fields, or every
    /// failure keyed by field name.
    pub fn validate(self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validation::validate_product_name(self.name.as_deref())
            .map_err(|e| errors.push(e))
            .ok();
        let category = validation::validate_category(self.category.as_deref())
            .map_err(|e| errors.push(e))
            .ok();
        let unit_price = validation::validate_unit_price(self.unit_price)
            .map_err(|e| errors.push(e))
            .ok();
        let quantity_in_stock = validation::validate_quantity_in_stock(self.quantity_in_stock)
            .map_err(|e| errors.push(e))
            .ok();

        match (name, category, unit_price, quantity_in_stock) {
            (Some(name), Some(category), Some(unit_price), Some(quantity_in_stock)) => {
                errors.into_result(NewProduct {
                    name,
                    category,
                    unit_price,
                    quantity_in_stock,
                    expiration_date: self.expiration_date,
                })
            }
            _ => Err(errors),
        }
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Validated product fields, ready for the catalog.
///
/// Only [`ProductDraft::validate`] builds this outside of tests, so a
/// `NewProduct` always satisfies the field rules.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_in_stock: i64,
    pub expiration_date: Option<NaiveDate>,
}

// =============================================================================
// Unit Tests
// =============================================================================
