//! # Query Engine
//!
//! Filters, sorts and paginates a catalog snapshot.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ProductQuery::run                                │
//! │                                                                         │
//! │  snapshot (insertion order)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Filter  name ⊂ (case-insensitive) → category ∈ set → in stock?     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Sort    primary key ──tie──► secondary key ──tie──► insertion order│
//! │       │     (stable sort; no keys = insertion order)                    │
//! │       ▼                                                                 │
//! │  3. Page    [page × size, min(page × size + size, len))                │
//! │             past the end → empty page, never an error                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absent Values
//! Only `expirationDate` can be absent on a stored product. Products without
//! one always sort after products with one, in BOTH directions: the
//! direction reverses the comparison of present values, never the position
//! of absent ones.

use std::cmp::Ordering;
use std::ops::Range;

use chrono::NaiveDate;

use crate::types::Product;
use crate::DEFAULT_PAGE_SIZE;

// =============================================================================
// Sort Field
// =============================================================================

/// A product field that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    UnitPrice,
    QuantityInStock,
    ExpirationDate,
    /// Fallback for unrecognised field names.
    Id,
}

impl SortField {
    /// Maps a wire field name to a sort field.
    ///
    /// Names are matched exactly (`unitPrice`, not `unitprice`); anything
    /// unrecognised sorts by `id`.
    pub fn parse(name: &str) -> SortField {
        match name {
            "name" => SortField::Name,
            "category" => SortField::Category,
            "unitPrice" => SortField::UnitPrice,
            "quantityInStock" => SortField::QuantityInStock,
            "expirationDate" => SortField::ExpirationDate,
            _ => SortField::Id,
        }
    }
}

// =============================================================================
// Sort Direction
// =============================================================================

/// Ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `desc` in any letter case is descending; everything else is ascending.
    pub fn parse(order: &str) -> SortDirection {
        if order.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// One level of the sort: a field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortKey { field, direction }
    }

    /// Ascending sort on `field`.
    pub fn ascending(field: SortField) -> Self {
        SortKey::new(field, SortDirection::Ascending)
    }

    /// Descending sort on `field`.
    pub fn descending(field: SortField) -> Self {
        SortKey::new(field, SortDirection::Descending)
    }

    /// Builds a key from wire parameters (`sortBy=unitPrice&order=desc`).
    pub fn from_params(field: &str, order: Option<&str>) -> Self {
        SortKey::new(
            SortField::parse(field),
            order.map(SortDirection::parse).unwrap_or_default(),
        )
    }

    /// Compares two products on this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let dir = self.direction;
        match self.field {
            SortField::Name => dir.apply(cmp_ignore_case(&a.name, &b.name)),
            SortField::Category => dir.apply(cmp_ignore_case(&a.category, &b.category)),
            SortField::UnitPrice => dir.apply(a.unit_price.total_cmp(&b.unit_price)),
            SortField::QuantityInStock => dir.apply(a.quantity_in_stock.cmp(&b.quantity_in_stock)),
            SortField::ExpirationDate => {
                cmp_absent_last(a.expiration_date, b.expiration_date, dir)
            }
            SortField::Id => dir.apply(a.id.cmp(&b.id)),
        }
    }
}

/// Case-insensitive lexicographic comparison without allocating.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_absent_last(a: Option<NaiveDate>, b: Option<NaiveDate>, dir: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => dir.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Which products a query keeps. Every predicate is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of `name`. Empty means no filter.
    pub name: Option<String>,

    /// Accepted categories (exact match). Empty means no filter.
    pub categories: Vec<String>,

    /// `Some(true)`: quantity > 0; `Some(false)`: quantity == 0.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    /// Returns a predicate for this filter, with the name needle lowercased
    /// once up front.
    fn predicate(&self) -> impl Fn(&Product) -> bool + '_ {
        let needle = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase);

        move |product: &Product| {
            if let Some(needle) = &needle {
                if !product.name.to_lowercase().contains(needle.as_str()) {
                    return false;
                }
            }
            if !self.categories.is_empty() && !self.categories.contains(&product.category) {
                return false;
            }
            match self.in_stock {
                Some(true) => product.quantity_in_stock > 0,
                Some(false) => product.quantity_in_stock == 0,
                None => true,
            }
        }
    }

    /// Whether `product` passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        (self.predicate())(product)
    }
}

// =============================================================================
// Page Request
// =============================================================================

/// A zero-based page index and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        PageRequest { page, size }
    }

    /// Index range of this page within `len` results.
    ///
    /// A page past the end yields an empty range.
    pub fn window(&self, len: usize) -> Range<usize> {
        let from = self.page.saturating_mul(self.size);
        if from >= len {
            return len..len;
        }
        let to = from.saturating_add(self.size).min(len);
        from..to
    }
}

// =============================================================================
// Product Query
// =============================================================================

/// A full query: filter, up to two sort keys, and a page.
///
/// ## Example
/// ```rust
/// use inventory_core::query::{PageRequest, ProductFilter, ProductQuery, SortField, SortKey};
///
/// let query = ProductQuery::new(ProductFilter {
///     in_stock: Some(true),
///     ..ProductFilter::default()
/// })
/// .sort_by(SortKey::descending(SortField::QuantityInStock))
/// .page(PageRequest::new(0, 20));
/// # let _ = query;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub primary: Option<SortKey>,
    pub secondary: Option<SortKey>,
    pub page: PageRequest,
}

impl ProductQuery {
    pub fn new(filter: ProductFilter) -> Self {
        ProductQuery {
            filter,
            ..ProductQuery::default()
        }
    }

    /// Sets the primary sort key.
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.primary = Some(key);
        self
    }

    /// Sets the secondary (tie-break) sort key.
    pub fn then_by(mut self, key: SortKey) -> Self {
        self.secondary = Some(key);
        self
    }

    /// Sets the page window.
    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Composes the active sort keys into one comparator.
    ///
    /// Returns `None` when no key is set (insertion order is kept). A lone
    /// secondary key acts as the only key.
    fn comparator(&self) -> Option<impl Fn(&&Product, &&Product) -> Ordering> {
        let keys: Vec<SortKey> = self.primary.into_iter().chain(self.secondary).collect();
        if keys.is_empty() {
            return None;
        }
        Some(move |a: &&Product, b: &&Product| {
            keys.iter()
                .map(|key| key.compare(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Filters and sorts `snapshot` without paging.
    pub fn matching<'a>(&self, snapshot: &'a [Product]) -> Vec<&'a Product> {
        let predicate = self.filter.predicate();
        let mut matched: Vec<&Product> = snapshot.iter().filter(|p| predicate(*p)).collect();

        if let Some(comparator) = self.comparator() {
            // stable: equal products keep insertion order
            matched.sort_by(comparator);
        }
        matched
    }

    /// Runs the query and returns the requested page.
    pub fn run(&self, snapshot: &[Product]) -> Vec<Product> {
        let matched = self.matching(snapshot);
        let window = self.page.window(matched.len());
        matched[window].iter().map(|p| (*p).clone()).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
