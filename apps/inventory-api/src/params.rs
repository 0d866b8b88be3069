//! Query-string parsing for the list and restock endpoints.
//!
//! Parameters arrive as raw `(key, value)` pairs so that `category` can be
//! repeated. Every malformed parameter is reported, not just the first.

use inventory_core::validation::{fields, validate_page, validate_page_size};
use inventory_core::{
    PageRequest, ProductFilter, ProductQuery, SortKey, ValidationError, ValidationErrors,
    DEFAULT_RESTOCK_QUANTITY,
};

/// Page size settings taken from the server configuration.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    pub default_size: usize,
}

/// Builds a [`ProductQuery`] from `GET /products` parameters.
///
/// | key | meaning |
/// |---|---|
/// | `name` | case-insensitive substring |
/// | `category` | repeatable, exact match against any |
/// | `inStock` | `true` / `false` |
/// | `sortBy`, `order` | primary key and direction |
/// | `sortBy2`, `order2` | secondary key and direction |
/// | `page`, `size` | zero-based page index and page size |
///
/// Unknown keys are ignored. When a single-valued key repeats, the last
/// value wins. A blank value counts as absent.
pub fn product_query(
    pairs: &[(String, String)],
    limits: PageLimits,
) -> Result<ProductQuery, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut filter = ProductFilter::default();
    let mut in_stock = None;
    let mut sort_by = None;
    let mut order = None;
    let mut sort_by2 = None;
    let mut order2 = None;
    let mut page = None;
    let mut size = None;

    for (key, value) in pairs {
        match key.as_str() {
            "name" => filter.name = Some(value.clone()).filter(|v| !v.is_empty()),
            "category" if !value.is_empty() => filter.categories.push(value.clone()),
            "inStock" => in_stock = non_blank(value),
            "sortBy" => sort_by = Some(value.as_str()),
            "order" => order = Some(value.as_str()),
            "sortBy2" => sort_by2 = Some(value.as_str()),
            "order2" => order2 = Some(value.as_str()),
            "page" => page = non_blank(value),
            "size" => size = non_blank(value),
            _ => {}
        }
    }

    filter.in_stock = match in_stock {
        None => None,
        Some(raw) => parse_bool(fields::IN_STOCK, raw)
            .map_err(|e| errors.push(e))
            .ok(),
    };

    let page_index = match page {
        None => Some(0),
        Some(raw) => parse_int(fields::PAGE, raw)
            .and_then(validate_page)
            .map_err(|e| errors.push(e))
            .ok(),
    };

    let page_size = match size {
        None => Some(limits.default_size),
        Some(raw) => parse_int(fields::SIZE, raw)
            .and_then(validate_page_size)
            .map_err(|e| errors.push(e))
            .ok(),
    };

    let (Some(page_index), Some(page_size)) = (page_index, page_size) else {
        return Err(errors);
    };
    errors.into_result(())?;

    let mut query = ProductQuery::new(filter)
        .page(PageRequest::new(page_index, page_size));
    if let Some(field) = sort_by.filter(|f| !f.is_empty()) {
        query = query.sort_by(SortKey::from_params(field, order));
    }
    if let Some(field) = sort_by2.filter(|f| !f.is_empty()) {
        query = query.then_by(SortKey::from_params(field, order2));
    }
    Ok(query)
}

/// Reads `quantity` for `PUT /products/{id}/instock`, defaulting to 10.
///
/// Only the format is checked here; the sign is checked by the catalog.
pub fn restock_quantity(pairs: &[(String, String)]) -> Result<i64, ValidationError> {
    let raw = pairs
        .iter()
        .rev()
        .find(|(key, _)| key == fields::QUANTITY)
        .and_then(|(_, value)| non_blank(value));
    match raw {
        None => Ok(DEFAULT_RESTOCK_QUANTITY),
        Some(raw) => parse_int(fields::QUANTITY, raw),
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.trim().is_empty())
}

fn parse_int(field: &str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{raw}' is not an integer"),
    })
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{raw}' is not true or false"),
        }),
    }
}
