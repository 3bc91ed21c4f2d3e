//! Favorite Entity
//!
//! One (user, product) marker document in the live store.

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{favorite_key::FavoriteKey, user_id::UserId};

/// Favorite entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Unix timestamp ms on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: UserId, product_id: ProductId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            product_id,
            created_at,
        }
    }

    pub fn key(&self) -> FavoriteKey {
        FavoriteKey::new(self.user_id.clone(), self.product_id)
    }
}
