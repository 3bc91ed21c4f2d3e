//! HTTP Handlers

use crate::application::add_product::AddProductUseCase;
use crate::application::config::CatalogConfig;
use crate::application::delete_product::DeleteProductUseCase;
use crate::application::derive_view::DeriveViewUseCase;
use crate::application::hydrate_catalog::HydrateCatalogUseCase;
use crate::application::update_product::{UpdateProductInput, UpdateProductUseCase};
use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repository::{CatalogRepository, CatalogSource};
use crate::domain::value_objects::SortConfig;
use crate::error::CatalogResult;
use crate::presentation::dto::{
    DashboardViewResponse, HydrateResponse, ToggleSortRequest, UserResponse, ViewQuery,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::ProductId;
use std::sync::Arc;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<S, R>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub source: Arc<S>,
    pub repo: Arc<R>,
    pub config: Arc<CatalogConfig>,
}

/// GET /api/catalog/view
pub async fn get_view<S, R>(
    State(state): State<CatalogAppState<S, R>>,
    Query(query): Query<ViewQuery>,
) -> Json<DashboardViewResponse>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeriveViewUseCase::new(state.repo.clone());
    let view = use_case.execute(query.into_selection()).await;
    Json(view.into())
}

/// GET /api/catalog/products
pub async fn list_products<S, R>(
    State(state): State<CatalogAppState<S, R>>,
) -> Json<Vec<Product>>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeriveViewUseCase::new(state.repo.clone());
    Json(use_case.products().await)
}

/// POST /api/catalog/products
pub async fn create_product<S, R>(
    State(state): State<CatalogAppState<S, R>>,
    Json(draft): Json<ProductDraft>,
) -> CatalogResult<impl IntoResponse>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddProductUseCase::new(state.repo.clone(), state.config.clone());
    let product = use_case.execute(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/catalog/products/{id}
pub async fn update_product<S, R>(
    State(state): State<CatalogAppState<S, R>>,
    Path(raw_id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> CatalogResult<Json<Product>>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let id: ProductId = raw_id.parse()?;
    let use_case = UpdateProductUseCase::new(state.repo.clone());
    let product = use_case
        .execute(UpdateProductInput {
            id,
            patch: draft,
        })
        .await?;
    Ok(Json(product))
}

/// DELETE /api/catalog/products/{id}
pub async fn delete_product<S, R>(
    State(state): State<CatalogAppState<S, R>>,
    Path(raw_id): Path<String>,
) -> CatalogResult<StatusCode>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let id: ProductId = raw_id.parse()?;
    DeleteProductUseCase::new(state.repo.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/catalog/sort/toggle
pub async fn toggle_sort(Json(req): Json<ToggleSortRequest>) -> Json<SortConfig> {
    Json(req.current.unwrap_or_default().toggle(req.field))
}

/// GET /api/catalog/users
pub async fn list_users<S, R>(
    State(state): State<CatalogAppState<S, R>>,
) -> Json<Vec<UserResponse>>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeriveViewUseCase::new(state.repo.clone());
    let users = use_case.users().await;
    Json(users.into_iter().map(UserResponse::from).collect())
}

/// POST /api/catalog/hydrate
pub async fn hydrate<S, R>(
    State(state): State<CatalogAppState<S, R>>,
) -> CatalogResult<Json<HydrateResponse>>
where
    S: CatalogSource + Clone + Send + Sync + 'static,
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        HydrateCatalogUseCase::new(state.source.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute().await?;
    Ok(Json(output.into()))
}
