//! Update Product Use Case

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use kernel::id::ProductId;
use std::sync::Arc;

/// Input DTO for update product
#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub id: ProductId,
    pub patch: ProductDraft,
}

/// Update Product Use Case
pub struct UpdateProductUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateProductInput) -> CatalogResult<Product> {
        let product = self.repo.update(input.id, input.patch).await?;

        tracing::info!(product_id = %product.id, "Product updated");

        Ok(product)
    }
}
