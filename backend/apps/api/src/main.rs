//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use axum::{
    Json, Router, http,
    http::{HeaderName, Method, header},
    routing::get,
};
use catalog::application::hydrate_catalog::HydrateCatalogUseCase;
use catalog::{HttpCatalogSource, InMemoryCatalogRepository, catalog_router};
use favorites::{InMemoryFavoritesStore, favorites_router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerSettings;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,catalog=info,favorites=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env()?;

    // Remote catalog + local state
    let catalog_source = HttpCatalogSource::from_config(&settings.catalog)?;
    let catalog_repo = InMemoryCatalogRepository::new();

    // Startup hydration: failures leave the catalog in the failed state,
    // clients can retry via POST /api/catalog/hydrate
    let hydrate = HydrateCatalogUseCase::new(
        Arc::new(catalog_source.clone()),
        Arc::new(catalog_repo.clone()),
        Arc::new(settings.catalog.clone()),
    );
    match hydrate.execute().await {
        Ok(output) => {
            tracing::info!(
                products = output.products,
                users = output.users,
                "Startup hydration completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Startup hydration failed, continuing anyway"
            );
        }
    }

    let favorites_store = InMemoryFavoritesStore::new();

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = settings
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let user_header: HeaderName = settings.favorites.user_header_name.parse()?;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            user_header,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .nest(
            "/api/catalog",
            catalog_router(catalog_source, catalog_repo, settings.catalog),
        )
        .nest(
            "/api/favorites",
            favorites_router(favorites_store, settings.favorites),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Start server
    let addr = settings.listen_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
