//! # Validation Module
//!
//! Field rules for product bodies and query parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  ├── JSON syntax and field types (deserialization)                     │
//! │  └── Failure → 400 { "body": "..." }                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (ProductDraft::validate)                         │
//! │  ├── Required fields, lengths, signs                                   │
//! │  └── Failure → 400 { field: message, ... }                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog store                                                │
//! │  └── Only ever receives NewProduct (already valid)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{validate_product_name, validate_unit_price};
//!
//! assert!(validate_product_name(Some("Pepsi")).is_ok());
//! assert!(validate_product_name(Some("   ")).is_err());
//! assert!(validate_unit_price(Some(0.0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Wire names of the validated fields.
pub mod fields {
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const UNIT_PRICE: &str = "unitPrice";
    pub const QUANTITY_IN_STOCK: &str = "quantityInStock";
    pub const QUANTITY: &str = "quantity";
    pub const PAGE: &str = "page";
    pub const SIZE: &str = "size";
    pub const IN_STOCK: &str = "inStock";
    /// Key for an unreadable request body.
    pub const BODY: &str = "body";
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must be present and not blank
/// - Must be at most 120 characters
///
/// The name is returned exactly as given (not trimmed).
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_product_name;
///
/// assert!(validate_product_name(Some("Coca-Cola 330ml")).is_ok());
/// assert!(validate_product_name(None).is_err());
/// assert!(validate_product_name(Some(&"A".repeat(121))).is_err());
/// ```
pub fn validate_product_name(name: Option<&str>) -> ValidationResult<String> {
    let name = require_text(fields::NAME, name)?;

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: fields::NAME.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a category label.
///
/// ## Rules
/// - Must be present and not blank
/// - Free-form otherwise (no fixed vocabulary)
pub fn validate_category(category: Option<&str>) -> ValidationResult<String> {
    require_text(fields::CATEGORY, category).map(str::to_string)
}

fn require_text<'a>(field: &str, value: Option<&'a str>) -> ValidationResult<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be present
/// - Must be strictly greater than zero (and finite)
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Some(11.0)).is_ok());
/// assert!(validate_unit_price(Some(-1.0)).is_err());
/// assert!(validate_unit_price(None).is_err());
/// ```
pub fn validate_unit_price(price: Option<f64>) -> ValidationResult<f64> {
    let price = price.ok_or_else(|| ValidationError::Required {
        field: fields::UNIT_PRICE.to_string(),
    })?;

    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: fields::UNIT_PRICE.to_string(),
        });
    }

    Ok(price)
}

/// Validates the stock level of a product body.
///
/// ## Rules
/// - Must be present
/// - Must be zero or greater
pub fn validate_quantity_in_stock(quantity: Option<i64>) -> ValidationResult<i64> {
    let quantity = quantity.ok_or_else(|| ValidationError::Required {
        field: fields::QUANTITY_IN_STOCK.to_string(),
    })?;
    non_negative(fields::QUANTITY_IN_STOCK, quantity)
}

/// Validates the `quantity` of a "mark in stock" request.
pub fn validate_restock_quantity(quantity: i64) -> ValidationResult<i64> {
    non_negative(fields::QUANTITY, quantity)
}

fn non_negative(field: &str, value: i64) -> ValidationResult<i64> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(value)
}

// =============================================================================
// Paging Validators
// =============================================================================

/// Validates a zero-based page index.
pub fn validate_page(page: i64) -> ValidationResult<usize> {
    let page = non_negative(fields::PAGE, page)?;
    usize::try_from(page).map_err(|_| ValidationError::InvalidFormat {
        field: fields::PAGE.to_string(),
        reason: "page index is too large".to_string(),
    })
}

/// Validates a page size.
///
/// Any size of at least 1 is accepted as given, so the page offset is
/// always `page × size`.
pub fn validate_page_size(size: i64) -> ValidationResult<usize> {
    if size < 1 {
        return Err(ValidationError::MustBePositive {
            field: fields::SIZE.to_string(),
        });
    }
    usize::try_from(size).map_err(|_| ValidationError::InvalidFormat {
        field: fields::SIZE.to_string(),
        reason: "page size is too large".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
