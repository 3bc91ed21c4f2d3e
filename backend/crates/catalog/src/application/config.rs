//! Application Configuration
//!
//! Configuration for the catalog application layer.

use platform::rest::RestConfig;
use std::time::Duration;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the remote catalog API
    pub api_base_url: String,
    /// How many users to request from `/users`
    pub users_limit: u32,
    /// Timeout for each remote request
    pub request_timeout: Duration,
    /// Image used for products added without one
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://fakestoreapi.com".to_string(),
            users_limit: 5,
            request_timeout: Duration::from_secs(10),
            placeholder_image: "https://via.placeholder.com/150".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Create config for development (short timeout so a dead upstream fails fast)
    pub fn development() -> Self {
        Self {
            request_timeout: Duration::from_secs(3),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// REST client settings for the remote source
    pub fn rest_config(&self) -> RestConfig {
        RestConfig::new(self.api_base_url.clone(), self.request_timeout)
    }
}
