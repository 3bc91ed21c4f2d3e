//! Application Configuration
//!
//! Configuration for the favorites application layer.

use std::time::Duration;

/// Favorites application configuration
#[derive(Debug, Clone)]
pub struct FavoritesConfig {
    /// Header carrying the already-authenticated user id
    pub user_header_name: String,
    /// Interval of SSE keep-alive comments on the live stream
    pub stream_keep_alive: Duration,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            user_header_name: "x-user-id".to_string(),
            stream_keep_alive: Duration::from_secs(15),
        }
    }
}

impl FavoritesConfig {
    pub fn with_user_header(mut self, name: impl Into<String>) -> Self {
        self.user_header_name = name.into().to_ascii_lowercase();
        self
    }
}
