//! Favorites Router

use crate::application::config::FavoritesConfig;
use crate::domain::repository::FavoritesStore;
use crate::infra::memory::InMemoryFavoritesStore;
use crate::presentation::handlers::{self, FavoritesAppState};
use crate::presentation::middleware::require_user;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the favorites router with the in-memory live store
pub fn favorites_router(store: InMemoryFavoritesStore, config: FavoritesConfig) -> Router {
    favorites_router_generic(store, config)
}

/// Create a generic favorites router for any store implementation
///
/// Every route requires a signed-in user.
pub fn favorites_router_generic<S>(store: S, config: FavoritesConfig) -> Router
where
    S: FavoritesStore + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = FavoritesAppState {
        store: Arc::new(store),
        config: config.clone(),
    };

    Router::new()
        .route("/", get(handlers::get_favorites::<S>))
        .route("/{product_id}/toggle", post(handlers::toggle_favorite::<S>))
        .route("/stream", get(handlers::stream_favorites::<S>))
        .route_layer(middleware::from_fn_with_state(config, require_user))
        .with_state(state)
}
