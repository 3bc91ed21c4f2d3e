//! Favorites Error Types
//!
//! Favorites-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::IdError;
use platform::client::ClientHeaderError;
use thiserror::Error;

/// Favorites-specific result type alias
pub type FavoritesResult<T> = Result<T, FavoritesError>;

/// Favorites-specific error variants
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// No signed-in user on the request
    #[error("Sign in to manage favorites")]
    MissingUser,

    /// User id header is present but unusable
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// Path carried a malformed product id
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] IdError),

    /// The store handed back a subscription that is already torn down
    #[error("Favorites subscription closed")]
    SubscriptionClosed,

    /// The live store rejected a write or a subscription
    #[error("Favorites store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FavoritesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FavoritesError::MissingUser => StatusCode::UNAUTHORIZED,
            FavoritesError::InvalidUserId(_) | FavoritesError::InvalidProductId(_) => {
                StatusCode::BAD_REQUEST
            }
            FavoritesError::SubscriptionClosed => StatusCode::SERVICE_UNAVAILABLE,
            FavoritesError::Store(_) | FavoritesError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FavoritesError::MissingUser => ErrorKind::Unauthorized,
            FavoritesError::InvalidUserId(_) | FavoritesError::InvalidProductId(_) => {
                ErrorKind::BadRequest
            }
            FavoritesError::SubscriptionClosed => ErrorKind::ServiceUnavailable,
            FavoritesError::Store(_) | FavoritesError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            FavoritesError::MissingUser => err.with_action("Sign in and try again"),
            FavoritesError::SubscriptionClosed => err.with_action("Reconnect to the stream"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FavoritesError::Store(msg) | FavoritesError::Internal(msg) => {
                tracing::error!(message = %msg, "Favorites internal error");
            }
            FavoritesError::SubscriptionClosed => {
                tracing::warn!("Favorites store closed the subscription");
            }
            _ => {
                tracing::debug!(error = %self, "Favorites error");
            }
        }
    }
}

impl From<ClientHeaderError> for FavoritesError {
    fn from(err: ClientHeaderError) -> Self {
        match err {
            ClientHeaderError::MissingHeader(_) => FavoritesError::MissingUser,
            ClientHeaderError::InvalidHeader(name) => {
                FavoritesError::InvalidUserId(format!("header {name} is not valid text"))
            }
        }
    }
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for FavoritesError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
