//! Favorites Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Favorite documents, keys, per-user sets, live store trait
//! - `application/` - Toggle use case and the live favorites session
//! - `infra/` - In-memory live store with per-user snapshot feeds
//! - `presentation/` - HTTP handlers, SSE stream, user-context middleware
//!
//! ## Subscription Model
//! - Readers get full snapshots, never deltas
//! - A session holds at most one live subscription; switching users cancels
//!   the old one before subscribing again
//! - Writes never update the reader directly; the next snapshot does

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FavoritesConfig;
pub use application::live_favorites::FavoritesSession;
pub use error::{FavoritesError, FavoritesResult};
pub use infra::memory::InMemoryFavoritesStore;
pub use presentation::middleware::UserContext;
pub use presentation::router::{favorites_router, favorites_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
