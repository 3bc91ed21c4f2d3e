//! Hydrate Catalog Use Case

use crate::application::config::CatalogConfig;
use crate::domain::repository::{CatalogRepository, CatalogSource};
use crate::error::{CatalogError, CatalogResult};
use std::sync::Arc;

/// Output DTO for hydrate catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrateCatalogOutput {
    pub products: usize,
    pub users: usize,
    pub dropped_duplicates: usize,
}

/// Hydrate Catalog Use Case
///
/// One-shot load of products and users from the remote API. A failed
/// product fetch leaves the catalog empty and marks the load as failed so a
/// later call can retry. A failed user fetch only costs the user count.
pub struct HydrateCatalogUseCase<S, R>
where
    S: CatalogSource,
    R: CatalogRepository,
{
    source: Arc<S>,
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<S, R> HydrateCatalogUseCase<S, R>
where
    S: CatalogSource,
    R: CatalogRepository,
{
    pub fn new(source: Arc<S>, repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self {
            source,
            repo,
            config,
        }
    }

    pub async fn execute(&self) -> CatalogResult<HydrateCatalogOutput> {
        if self.repo.is_hydrated().await {
            return Err(CatalogError::AlreadyHydrated);
        }

        let (products, users) = tokio::join!(
            self.source.fetch_products(),
            self.source.fetch_users(self.config.users_limit)
        );

        let products = match products {
            Ok(products) => products,
            Err(e) => {
                self.repo.mark_failed(e.to_string()).await;
                return Err(e);
            }
        };

        let users = users.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "User fetch failed; registered user count will be 0");
            Vec::new()
        });
        let user_count = users.len();

        let report = self.repo.hydrate(products, users).await?;

        if report.dropped_duplicates > 0 {
            tracing::warn!(
                dropped = report.dropped_duplicates,
                "Remote catalog contained duplicate product ids"
            );
        }

        tracing::info!(
            products = report.accepted,
            users = user_count,
            "Catalog hydrated"
        );

        Ok(HydrateCatalogOutput {
            products: report.accepted,
            users: user_count,
            dropped_duplicates: report.dropped_duplicates,
        })
    }
}
