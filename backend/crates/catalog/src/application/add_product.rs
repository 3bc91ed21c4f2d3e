//! Add Product Use Case

use crate::application::config::CatalogConfig;
use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use std::sync::Arc;

/// Add Product Use Case
pub struct AddProductUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> AddProductUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let product = self
            .repo
            .add(draft, &self.config.placeholder_image)
            .await?;

        tracing::info!(product_id = %product.id, title = %product.title, "Product added");

        Ok(product)
    }
}
