//! Error types for the Inventory API.
//!
//! ```text
//! StoreError::NotFound    ──► 404, empty body
//! StoreError::Validation  ──► 400, { "field": "message", ... }
//! JsonRejection           ──► 400, { "body": "..." }
//! ```

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventory_core::validation::fields;
use inventory_core::{ValidationError, ValidationErrors};
use inventory_store::StoreError;

/// What a client can get back besides a success.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    Validation(ValidationErrors),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(errors) => {
                let body: BTreeMap<String, String> = errors.into_map();
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => ApiError::NotFound,
            StoreError::Validation(errors) => ApiError::Validation(errors),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error.into())
    }
}

/// Unreadable JSON (bad syntax, wrong field type, wrong content type).
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::from(ValidationError::InvalidFormat {
            field: fields::BODY.to_string(),
            reason: rejection.body_text(),
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
