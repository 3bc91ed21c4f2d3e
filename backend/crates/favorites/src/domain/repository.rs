//! Repository Traits
//!
//! Interface of the live favorites store. Implementation is in infrastructure layer.

use platform::snapshot::Subscription;

use crate::domain::entity::favorite::Favorite;
use crate::domain::value_object::{favorite_key::FavoriteKey, user_id::UserId};
use crate::error::FavoritesResult;

/// Live favorites store
///
/// Writes are full-document upserts and idempotent removes. Reads are
/// full snapshots filtered to one user.
#[trait_variant::make(FavoritesStore: Send)]
pub trait LocalFavoritesStore {
    /// Insert or replace the document at `favorite.key()`
    async fn upsert(&self, favorite: Favorite) -> FavoritesResult<()>;

    /// Remove a document; returns whether it existed
    async fn remove(&self, key: &FavoriteKey) -> FavoritesResult<bool>;

    /// Current favorites of one user
    async fn snapshot(&self, user_id: &UserId) -> FavoritesResult<Vec<Favorite>>;

    /// Live query on one user's favorites
    ///
    /// The first snapshot is the current state; each later one follows a
    /// change to that user's documents.
    async fn subscribe(&self, user_id: &UserId) -> FavoritesResult<Subscription<Vec<Favorite>>>;
}
