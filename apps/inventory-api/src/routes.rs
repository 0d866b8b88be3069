//! # HTTP Routes
//!
//! ```text
//! POST   /products                  create
//! GET    /products                  filter / sort / page
//! GET    /products/metrics          aggregates
//! GET    /products/{id}             fetch one
//! PUT    /products/{id}             full replacement
//! DELETE /products/{id}             remove (204)
//! PUT    /products/{id}/instock     set stock (?quantity=N, default 10)
//! POST   /products/{id}/outofstock  set stock to 0
//! GET    /health                    liveness + product count
//! ```
//!
//! Handlers are thin: parse, validate, call the catalog, map errors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use inventory_core::{InventoryMetrics, Product, ProductDraft};
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::params::{self, PageLimits};
use crate::request_log::request_logging;
use crate::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/metrics", get(product_metrics))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/{id}/instock", put(mark_in_stock))
        .route("/products/{id}/outofstock", post(mark_out_of_stock))
        .route("/health", get(health))
        .layer(middleware::from_fn(request_logging))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(draft) = body?;
    let fields = draft.validate()?;
    Ok(Json(state.catalog.create(fields).await))
}

async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Product>>> {
    let limits = PageLimits {
        default_size: state.config.default_page_size,
    };
    let query = params::product_query(&pairs, limits)?;
    debug!(?query, "Listing products");
    Ok(Json(state.catalog.query(&query).await))
}

async fn product_metrics(State(state): State<AppState>) -> Json<InventoryMetrics> {
    Json(state.catalog.metrics().await)
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    Ok(Json(state.catalog.get(id).await?))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let Json(draft) = body?;
    let fields = draft.validate()?;
    Ok(Json(state.catalog.update(id, fields).await?))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn mark_in_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let quantity = params::restock_quantity(&pairs)?;
    Ok(Json(state.catalog.set_stock(id, quantity).await?))
}

async fn mark_out_of_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    Ok(Json(state.catalog.clear_stock(id).await?))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    products: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.catalog.len().await,
    })
}

/// A path id that is not a non-negative integer can never match a product.
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| {
        debug!(id = raw, "Unparseable product id");
        ApiError::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("-1"), Err(ApiError::NotFound)));
    }
}
