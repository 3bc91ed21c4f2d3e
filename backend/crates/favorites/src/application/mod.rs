//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod live_favorites;
pub mod toggle_favorite;

pub use live_favorites::FavoritesSession;
pub use toggle_favorite::{ToggleFavoriteInput, ToggleFavoriteUseCase, ToggleOutcome};
