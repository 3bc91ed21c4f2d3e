//! Derive View Use Case

use crate::domain::entities::{Product, User};
use crate::domain::repository::CatalogRepository;
use crate::domain::services;
use crate::domain::value_objects::{DashboardStats, LoadStatus, SortConfig, ViewSelection};
use std::sync::Arc;

/// Output DTO for derive view
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub products: Vec<Product>,
    pub stats: DashboardStats,
    /// Selector options, wildcard first
    pub categories: Vec<String>,
    /// Category choices for the product form, no wildcard
    pub form_categories: Vec<String>,
    pub sort: SortConfig,
    pub status: LoadStatus,
}

/// Derive View Use Case
///
/// Works on a cloned snapshot so slow readers never hold the catalog lock.
pub struct DeriveViewUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> DeriveViewUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, selection: ViewSelection) -> DashboardView {
        let snapshot = self.repo.snapshot().await;
        let products = services::derive_view(&snapshot.products, &selection);

        DashboardView {
            stats: services::dashboard_stats(&snapshot.products, &products, &snapshot.users),
            categories: services::category_options(&snapshot.products),
            form_categories: services::categories(&snapshot.products),
            products,
            sort: selection.sort,
            status: snapshot.status,
        }
    }

    /// Full catalog in storage order
    pub async fn products(&self) -> Vec<Product> {
        self.repo.snapshot().await.products
    }

    pub async fn users(&self) -> Vec<User> {
        self.repo.snapshot().await.users
    }
}
