//! Unified error types for the item service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Errors produced by the item store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The `name` field was missing or empty.
    #[error("name is required")]
    NameRequired,
}

/// Stable JSON error body returned to API callers.
///
/// Every user-visible failure carries this shape and nothing else: no stack
/// traces, no internal identifiers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client supplied a request body missing a required field.
    #[error("{0}")]
    InvalidInput(String),

    /// Requested resource does not exist. A normal outcome, not a fault.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure while handling a request. Logged with detail,
    /// surfaced to the caller as a generic message.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Not-found error with the canonical item message.
    pub fn item_not_found() -> Self {
        ApiError::NotFound("Item not found".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NameRequired => ApiError::InvalidInput("Name is required".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(err) => {
                error!("unhandled error while serving request: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
