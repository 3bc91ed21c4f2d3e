//! Catalog Router

use crate::application::config::CatalogConfig;
use crate::domain::repository::{CatalogRepository, CatalogSource};
use crate::infra::http::HttpCatalogSource;
use crate::infra::memory::InMemoryCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Create the catalog router with the REST source and in-memory store
pub fn catalog_router(
    source: HttpCatalogSource,
    repo: InMemoryCatalogRepository,
    config: CatalogConfig,
) -> Router {
    catalog_router_generic(source, repo, config)
}

/// Create a generic catalog router for any source/repository implementation
pub fn catalog_router_generic<S, R>(source: S, repo: R, config: CatalogConfig) -> Router
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        source: Arc::new(source),
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/view", get(handlers::get_view::<S, R>))
        .route(
            "/products",
            get(handlers::list_products::<S, R>).post(handlers::create_product::<S, R>),
        )
        .route(
            "/products/{id}",
            put(handlers::update_product::<S, R>).delete(handlers::delete_product::<S, R>),
        )
        .route("/sort/toggle", post(handlers::toggle_sort))
        .route("/users", get(handlers::list_users::<S, R>))
        .route("/hydrate", post(handlers::hydrate::<S, R>))
        .with_state(state)
}
