//! Favorite Set Value Object

use kernel::id::ProductId;
use std::collections::BTreeSet;

use crate::domain::entity::favorite::Favorite;

/// Product ids one user has marked, derived from a full store snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    product_ids: BTreeSet<ProductId>,
}

impl FavoriteSet {
    pub fn from_favorites(favorites: &[Favorite]) -> Self {
        Self {
            product_ids: favorites.iter().map(|f| f.product_id).collect(),
        }
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.product_ids.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Ascending product ids
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.product_ids.iter().copied().collect()
    }
}
