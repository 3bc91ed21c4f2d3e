//! Toggle Favorite Use Case

use crate::domain::entity::favorite::Favorite;
use crate::domain::repository::FavoritesStore;
use crate::domain::value_object::{
    favorite_key::FavoriteKey, favorite_set::FavoriteSet, user_id::UserId,
};
use crate::error::FavoritesResult;
use chrono::Utc;
use kernel::id::ProductId;
use std::sync::Arc;

/// Input DTO for toggle favorite
#[derive(Debug, Clone)]
pub struct ToggleFavoriteInput {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// What the toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    pub fn is_favorited(self) -> bool {
        matches!(self, ToggleOutcome::Added)
    }
}

/// Toggle Favorite Use Case
///
/// Only writes. Callers that render favorites pick up the change from
/// their live subscription.
pub struct ToggleFavoriteUseCase<S>
where
    S: FavoritesStore,
{
    store: Arc<S>,
}

impl<S> ToggleFavoriteUseCase<S>
where
    S: FavoritesStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: ToggleFavoriteInput) -> FavoritesResult<ToggleOutcome> {
        let current = FavoriteSet::from_favorites(&self.store.snapshot(&input.user_id).await?);

        let key = FavoriteKey::new(input.user_id.clone(), input.product_id);
        let outcome = if current.contains(input.product_id) {
            self.store.remove(&key).await?;
            ToggleOutcome::Removed
        } else {
            let favorite = Favorite::new(input.user_id.clone(), input.product_id, Utc::now());
            self.store.upsert(favorite).await?;
            ToggleOutcome::Added
        };

        tracing::info!(
            key = %key,
            favorited = outcome.is_favorited(),
            "Favorite toggled"
        );

        Ok(outcome)
    }
}
