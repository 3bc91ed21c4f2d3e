//! Favorite Key Value Object
//!
//! Document key of one favorite: `{userId}_{productId}`.

use kernel::id::ProductId;
use std::fmt;

use crate::domain::value_object::user_id::UserId;

/// Separator between the user and product part
pub const KEY_SEPARATOR: char = '_';

/// Composite key (user, product)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteKey {
    user_id: UserId,
    product_id: ProductId,
}

impl FavoriteKey {
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            user_id,
            product_id,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }
}

impl fmt::Display for FavoriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.user_id, KEY_SEPARATOR, self.product_id)
    }
}
