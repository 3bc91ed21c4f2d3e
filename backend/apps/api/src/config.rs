//! Server Settings
//!
//! Reads process configuration from environment variables, falling back to
//! development defaults for anything unset.

use anyhow::Context;
use catalog::CatalogConfig;
use favorites::FavoritesConfig;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Everything `main` needs to start serving
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub listen_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub catalog: CatalogConfig,
    pub favorites: FavoritesConfig,
}

impl ServerSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut catalog = if cfg!(debug_assertions) {
            CatalogConfig::development()
        } else {
            CatalogConfig::default()
        };

        if let Some(url) = lookup("CATALOG_API_URL") {
            catalog.api_base_url = url;
        }
        if let Some(limit) = lookup("CATALOG_USERS_LIMIT") {
            catalog.users_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_USERS_LIMIT must be a number, got '{limit}'"))?;
        }
        if let Some(secs) = lookup("CATALOG_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().with_context(|| {
                format!("CATALOG_REQUEST_TIMEOUT_SECS must be a number, got '{secs}'")
            })?;
            catalog.request_timeout = Duration::from_secs(secs);
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr
            .trim()
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: '{listen_addr}'"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            frontend_origins,
            catalog,
            favorites: FavoritesConfig::default(),
        })
    }
}
