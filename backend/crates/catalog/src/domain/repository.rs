//! Repository Traits
//!
//! Interfaces for the remote catalog and for local catalog state.
//! Implementations are in the infrastructure layer.

use kernel::id::ProductId;

use crate::domain::catalog::{CatalogSnapshot, HydrateReport};
use crate::domain::entities::{Product, ProductDraft, User};
use crate::error::CatalogResult;

/// Read-only remote catalog API
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// Fetch the full product list
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;

    /// Fetch up to `limit` registered users
    async fn fetch_users(&self, limit: u32) -> CatalogResult<Vec<User>>;
}

/// Local catalog state repository
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Clone of the current state
    async fn snapshot(&self) -> CatalogSnapshot;

    async fn is_hydrated(&self) -> bool;

    /// Replace products and users with the remote result and mark Ready
    async fn hydrate(&self, products: Vec<Product>, users: Vec<User>)
        -> CatalogResult<HydrateReport>;

    /// Record a failed hydration; the catalog stays as it was
    async fn mark_failed(&self, message: String);

    /// Add a product; id assignment happens under the same lock as the insert
    async fn add(&self, draft: ProductDraft, placeholder_image: &str) -> CatalogResult<Product>;

    async fn update(&self, id: ProductId, patch: ProductDraft) -> CatalogResult<Product>;

    async fn delete(&self, id: ProductId) -> CatalogResult<Product>;
}
