//! JSON REST Client
//!
//! Thin wrapper over `reqwest` for read-only upstream APIs that return whole
//! collections as JSON. No retries here; callers surface failures as-is.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// REST client configuration
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL, e.g. `https://fakestoreapi.com`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("dashboard-backend/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            ..Default::default()
        }
    }
}

/// Errors from upstream REST calls
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("Invalid base URL: '{0}'")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RestError {
    /// Whether the failure was the request timing out
    pub fn is_timeout(&self) -> bool {
        match self {
            RestError::Request { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// JSON REST client bound to one base URL
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &RestConfig) -> Result<Self, RestError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RestError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(RestError::Build)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path onto the base URL with exactly one slash between them
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with query parameters and decode the JSON body
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);

        tracing::debug!(url = %url, "Fetching upstream resource");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| RestError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RestError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| RestError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_single_slash() {
        let client = RestClient::new(&RestConfig::new(
            "https://fakestoreapi.com/",
            Duration::from_secs(1),
        ))
        .unwrap();

        assert_eq!(client.base_url(), "https://fakestoreapi.com");
        assert_eq!(client.url_for("/products"), "https://fakestoreapi.com/products");
        assert_eq!(client.url_for("users"), "https://fakestoreapi.com/users");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = RestClient::new(&RestConfig::new("fakestoreapi.com", Duration::from_secs(1)));
        assert!(matches!(result, Err(RestError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_default_config() {
        let config = RestConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("dashboard-backend/"));
    }

    #[test]
    fn test_status_error_display() {
        let err = RestError::Status {
            url: "https://fakestoreapi.com/products".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("503"));
        assert!(!err.is_timeout());
    }
}
