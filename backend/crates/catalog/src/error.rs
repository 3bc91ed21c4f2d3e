//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{IdError, ProductId};
use platform::rest::RestError;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
///
/// Every variant is recoverable: the dashboard shows an inline message or a
/// loading-failed state, never tears down the session.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required product field is missing or out of range
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Update/delete referenced an id that is not in the catalog
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// Path or query carried a malformed product id
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] IdError),

    /// The largest product id leaves no room for another one
    #[error("No product id is left after {0}")]
    IdsExhausted(ProductId),

    /// The catalog was already hydrated; local edits are never overwritten
    #[error("Catalog is already loaded")]
    AlreadyHydrated,

    /// Fetching from the remote catalog API failed
    #[error("Failed to load remote catalog: {0}")]
    RemoteFetch(#[from] RestError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidProductId(_) => StatusCode::BAD_REQUEST,
            CatalogError::IdsExhausted(_) | CatalogError::AlreadyHydrated => StatusCode::CONFLICT,
            CatalogError::RemoteFetch(_) => StatusCode::BAD_GATEWAY,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation { .. } => ErrorKind::UnprocessableEntity,
            CatalogError::ProductNotFound(_) => ErrorKind::NotFound,
            CatalogError::InvalidProductId(_) => ErrorKind::BadRequest,
            CatalogError::IdsExhausted(_) | CatalogError::AlreadyHydrated => ErrorKind::Conflict,
            CatalogError::RemoteFetch(_) => ErrorKind::BadGateway,
            CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Validation { field, message } => {
                AppError::validation(*field, message.clone())
            }
            CatalogError::RemoteFetch(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Reload the dashboard to try again"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::RemoteFetch(e) => {
                tracing::warn!(error = %e, "Remote catalog fetch failed");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::ProductNotFound(id) => {
                tracing::warn!(product_id = %id, "Edit referenced a missing product");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
