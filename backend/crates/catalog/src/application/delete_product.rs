//! Delete Product Use Case

use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use kernel::id::ProductId;
use std::sync::Arc;

/// Delete Product Use Case
pub struct DeleteProductUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<()> {
        let removed = self.repo.delete(id).await?;

        tracing::info!(product_id = %removed.id, title = %removed.title, "Product deleted");

        Ok(())
    }
}
