//! User Context Middleware
//!
//! Resolves the signed-in user from the identity header and hands it to
//! handlers as an explicit [`UserContext`] request extension.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::extract_header;
use std::sync::Arc;

use crate::application::config::FavoritesConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::FavoritesError;

/// Signed-in user for the current request
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: UserId,
}

/// Middleware that requires a signed-in user
pub async fn require_user(
    State(config): State<Arc<FavoritesConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, FavoritesError> {
    let raw = extract_header(req.headers(), &config.user_header_name)?;
    let user_id = UserId::new(&raw)?;

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}
