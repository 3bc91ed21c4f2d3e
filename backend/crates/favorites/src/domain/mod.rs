//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::favorite::Favorite;
pub use repository::FavoritesStore;
pub use value_object::{favorite_key::FavoriteKey, favorite_set::FavoriteSet, user_id::UserId};
