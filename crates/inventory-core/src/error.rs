//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  ├── ValidationError   - One field failing one rule                    │
//! │  └── ValidationErrors  - Every failing field of one request            │
//! │                                                                         │
//! │  inventory-store errors (separate crate)                               │
//! │  └── StoreError        - Catalog operation failures                    │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError          - What clients see (400 map / 404)              │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationErrors → StoreError → ApiError      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, rule)
//! 3. Errors are enum variants, never String
//! 4. Each validation variant renders as the message a client sees

use std::collections::BTreeMap;

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing a single rule.
///
/// The `Display` output is the human-readable message reported to clients
/// under the field's name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (unparseable number, boolean, date, or JSON body).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Validation Errors (collection)
// =============================================================================

/// Every failing field of one request, keyed by field name.
///
/// When a field fails more than one rule, the first failure recorded wins.
/// Keys are kept sorted so the serialized map is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for: {}", field_list(.fields))]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records a failure, keeping any earlier message for the same field.
    pub fn push(&mut self, error: ValidationError) {
        self.fields
            .entry(error.field().to_string())
            .or_insert_with(|| error.to_string());
    }

    /// Returns true when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message recorded for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Consumes the collection, yielding the field → message map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn field_list(fields: &BTreeMap<String, String>) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = ValidationErrors::new();
        errors.push(error);
        errors
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
