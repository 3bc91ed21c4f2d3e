//! Live Favorites Session
//!
//! Keeps at most one live subscription per signed-in user. Switching users
//! tears down the old subscription before opening the new one; ending the
//! session (logout) tears it down and clears the set.

use crate::domain::entity::favorite::Favorite;
use crate::domain::repository::FavoritesStore;
use crate::domain::value_object::{favorite_set::FavoriteSet, user_id::UserId};
use crate::error::{FavoritesError, FavoritesResult};
use platform::snapshot::Subscription;
use std::sync::Arc;

/// One client's view of its favorites
pub struct FavoritesSession<S>
where
    S: FavoritesStore,
{
    store: Arc<S>,
    user_id: Option<UserId>,
    subscription: Subscription<Vec<Favorite>>,
    favorites: FavoriteSet,
}

impl<S> FavoritesSession<S>
where
    S: FavoritesStore,
{
    /// Session with nobody signed in
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            user_id: None,
            subscription: Subscription::closed(),
            favorites: FavoriteSet::default(),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Last snapshot received
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_live(&self) -> bool {
        self.subscription.is_active()
    }

    /// Change the signed-in user
    ///
    /// The previous subscription is cancelled first, so snapshots for the old
    /// user can never arrive after this returns. `None` behaves like [`Self::end`].
    /// A subscription the store has already closed leaves the session signed out.
    pub async fn switch_user(&mut self, user_id: Option<UserId>) -> FavoritesResult<()> {
        self.subscription.cancel();
        self.favorites = FavoriteSet::default();
        self.user_id = None;

        let Some(user_id) = user_id else {
            return Ok(());
        };

        let subscription = self.store.subscribe(&user_id).await?;
        if !subscription.is_active() {
            return Err(FavoritesError::SubscriptionClosed);
        }

        self.subscription = subscription;
        tracing::debug!(user_id = %user_id, "Favorites subscription opened");
        self.user_id = Some(user_id);
        Ok(())
    }

    /// Wait for the next full snapshot and adopt it
    ///
    /// `None` once the session has ended or the store went away.
    pub async fn next_snapshot(&mut self) -> Option<&FavoriteSet> {
        let favorites = self.subscription.next().await?;
        self.favorites = FavoriteSet::from_favorites(&favorites);
        Some(&self.favorites)
    }

    /// Logout: cancel the subscription and forget the user
    pub fn end(&mut self) {
        if let Some(user_id) = self.user_id.take() {
            tracing::debug!(user_id = %user_id, "Favorites subscription closed");
        }
        self.subscription.cancel();
        self.favorites = FavoriteSet::default();
    }
}
