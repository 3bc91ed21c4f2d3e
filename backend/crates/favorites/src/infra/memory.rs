//! In-Memory Live Favorites Store
//!
//! Documents live in one map keyed by [`FavoriteKey`]. Each user with open
//! subscriptions has a [`SnapshotFeed`]; a write republishes only the
//! writing user's feed. Feeds nobody listens to are dropped on the next
//! write for that user or the next subscribe by anyone.

use platform::snapshot::{SnapshotFeed, Subscription};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::favorite::Favorite;
use crate::domain::repository::FavoritesStore;
use crate::domain::value_object::{favorite_key::FavoriteKey, user_id::UserId};
use crate::error::FavoritesResult;

#[derive(Debug, Default)]
struct StoreState {
    documents: BTreeMap<FavoriteKey, Favorite>,
    feeds: HashMap<UserId, SnapshotFeed<Vec<Favorite>>>,
}

impl StoreState {
    /// Favorites of one user, oldest first
    fn snapshot_for(&self, user_id: &UserId) -> Vec<Favorite> {
        let mut favorites: Vec<Favorite> = self
            .documents
            .values()
            .filter(|f| f.user_id == *user_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.product_id.cmp(&b.product_id))
        });
        favorites
    }

    /// Push the user's new snapshot, dropping the feed once nobody listens
    fn notify(&mut self, user_id: &UserId) {
        let Some(feed) = self.feeds.get(user_id) else {
            return;
        };

        if feed.subscriber_count() == 0 {
            self.feeds.remove(user_id);
            return;
        }

        let snapshot = self.snapshot_for(user_id);
        if let Some(feed) = self.feeds.get(user_id) {
            feed.publish(snapshot);
        }
    }

    fn prune_idle_feeds(&mut self) {
        self.feeds.retain(|_, feed| feed.subscriber_count() > 0);
    }
}

/// In-memory favorites store
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavoritesStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a live feed
    pub async fn live_feeds(&self) -> usize {
        self.state.read().await.feeds.len()
    }
}

impl FavoritesStore for InMemoryFavoritesStore {
    async fn upsert(&self, favorite: Favorite) -> FavoritesResult<()> {
        let mut state = self.state.write().await;
        let user_id = favorite.user_id.clone();
        state.documents.insert(favorite.key(), favorite);
        state.notify(&user_id);
        Ok(())
    }

    async fn remove(&self, key: &FavoriteKey) -> FavoritesResult<bool> {
        let mut state = self.state.write().await;
        let existed = state.documents.remove(key).is_some();
        if existed {
            state.notify(key.user_id());
        }
        Ok(existed)
    }

    async fn snapshot(&self, user_id: &UserId) -> FavoritesResult<Vec<Favorite>> {
        Ok(self.state.read().await.snapshot_for(user_id))
    }

    async fn subscribe(&self, user_id: &UserId) -> FavoritesResult<Subscription<Vec<Favorite>>> {
        let mut state = self.state.write().await;
        state.prune_idle_feeds();
        let snapshot = state.snapshot_for(user_id);

        let feed = state
            .feeds
            .entry(user_id.clone())
            .or_insert_with(|| SnapshotFeed::new(Vec::new()));
        // A reused feed may hold a snapshot from before it went idle
        feed.publish(snapshot);

        Ok(feed.subscribe())
    }
}
