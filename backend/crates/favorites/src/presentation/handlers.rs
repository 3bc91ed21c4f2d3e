//! HTTP Handlers

use crate::application::config::FavoritesConfig;
use crate::application::live_favorites::FavoritesSession;
use crate::application::toggle_favorite::{ToggleFavoriteInput, ToggleFavoriteUseCase};
use crate::domain::repository::FavoritesStore;
use crate::domain::value_object::favorite_set::FavoriteSet;
use crate::error::FavoritesResult;
use crate::presentation::dto::{FavoritesResponse, ToggleResponse};
use crate::presentation::middleware::UserContext;
use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::{Extension, Json};
use futures::stream::{self, Stream};
use kernel::id::ProductId;
use std::sync::Arc;

/// Shared state for favorites handlers
#[derive(Clone)]
pub struct FavoritesAppState<S>
where
    S: FavoritesStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<FavoritesConfig>,
}

/// GET /api/favorites
pub async fn get_favorites<S>(
    State(state): State<FavoritesAppState<S>>,
    Extension(ctx): Extension<UserContext>,
) -> FavoritesResult<Json<FavoritesResponse>>
where
    S: FavoritesStore + Clone + Send + Sync + 'static,
{
    let favorites = state.store.snapshot(&ctx.user_id).await?;
    let set = FavoriteSet::from_favorites(&favorites);
    Ok(Json(FavoritesResponse::new(&ctx.user_id, &set)))
}

/// POST /api/favorites/{product_id}/toggle
pub async fn toggle_favorite<S>(
    State(state): State<FavoritesAppState<S>>,
    Extension(ctx): Extension<UserContext>,
    Path(raw_id): Path<String>,
) -> FavoritesResult<Json<ToggleResponse>>
where
    S: FavoritesStore + Clone + Send + Sync + 'static,
{
    let product_id: ProductId = raw_id.parse()?;

    let use_case = ToggleFavoriteUseCase::new(state.store.clone());
    let outcome = use_case
        .execute(ToggleFavoriteInput {
            user_id: ctx.user_id,
            product_id,
        })
        .await?;

    Ok(Json(ToggleResponse::new(product_id, outcome)))
}

/// GET /api/favorites/stream
///
/// One live subscription per connection; it is cancelled when the client
/// disconnects and the stream is dropped.
pub async fn stream_favorites<S>(
    State(state): State<FavoritesAppState<S>>,
    Extension(ctx): Extension<UserContext>,
) -> FavoritesResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>>
where
    S: FavoritesStore + Clone + Send + Sync + 'static,
{
    let mut session = FavoritesSession::new(state.store.clone());
    session.switch_user(Some(ctx.user_id.clone())).await?;

    tracing::info!(user_id = %ctx.user_id, "Favorites stream opened");

    let user_id = ctx.user_id;
    let events = stream::unfold(session, move |mut session| {
        let user_id = user_id.clone();
        async move {
            let set = session.next_snapshot().await?.clone();
            let event = Event::default()
                .event("favorites")
                .json_data(FavoritesResponse::new(&user_id, &set));
            Some((event, session))
        }
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::new().interval(state.config.stream_keep_alive)))
}
