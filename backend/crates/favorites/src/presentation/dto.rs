//! API DTOs (Data Transfer Objects)

use kernel::id::ProductId;
use serde::Serialize;

use crate::application::toggle_favorite::ToggleOutcome;
use crate::domain::value_object::{favorite_set::FavoriteSet, user_id::UserId};

/// Response for GET /api/favorites and each event of GET /api/favorites/stream
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
}

impl FavoritesResponse {
    pub fn new(user_id: &UserId, favorites: &FavoriteSet) -> Self {
        Self {
            user_id: user_id.clone(),
            product_ids: favorites.product_ids(),
        }
    }
}

/// Response for POST /api/favorites/{product_id}/toggle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub product_id: ProductId,
    pub favorited: bool,
}

impl ToggleResponse {
    pub fn new(product_id: ProductId, outcome: ToggleOutcome) -> Self {
        Self {
            product_id,
            favorited: outcome.is_favorited(),
        }
    }
}
