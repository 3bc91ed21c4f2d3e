//! In-Memory Catalog Store
//!
//! One catalog per process behind a `tokio::sync::RwLock`. Mutations run
//! under the write lock, so id assignment and insertion are a single step.

use chrono::Utc;
use kernel::id::ProductId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{CatalogSnapshot, HydrateReport, LocalCatalog};
use crate::domain::entities::{Product, ProductDraft, User};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_objects::LoadStatus;
use crate::error::CatalogResult;

#[derive(Debug, Default)]
struct CatalogState {
    catalog: LocalCatalog,
    users: Vec<User>,
    status: LoadStatus,
}

/// In-memory catalog repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            products: state.catalog.products().to_vec(),
            users: state.users.clone(),
            status: state.status.clone(),
        }
    }

    async fn is_hydrated(&self) -> bool {
        self.state.read().await.catalog.is_hydrated()
    }

    async fn hydrate(&self, products: Vec<Product>, users: Vec<User>) -> CatalogResult<HydrateReport> {
        let mut state = self.state.write().await;
        let report = state.catalog.hydrate(products)?;
        state.users = users;
        state.status = LoadStatus::Ready {
            loaded_at: Utc::now(),
        };
        Ok(report)
    }

    async fn mark_failed(&self, message: String) {
        let mut state = self.state.write().await;
        if !state.catalog.is_hydrated() {
            state.status = LoadStatus::Failed { message };
        }
    }

    async fn add(&self, draft: ProductDraft, placeholder_image: &str) -> CatalogResult<Product> {
        self.state.write().await.catalog.add(draft, placeholder_image)
    }

    async fn update(&self, id: ProductId, patch: ProductDraft) -> CatalogResult<Product> {
        self.state.write().await.catalog.update(id, patch)
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<Product> {
        self.state.write().await.catalog.delete(id)
    }
}
