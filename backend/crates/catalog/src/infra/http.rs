//! Remote Catalog Source over HTTP

use platform::rest::{RestClient, RestError};

use crate::application::config::CatalogConfig;
use crate::domain::entities::{Product, User};
use crate::domain::repository::CatalogSource;
use crate::error::CatalogResult;

/// Catalog source backed by the public store REST API
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: RestClient,
}

impl HttpCatalogSource {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, RestError> {
        Ok(Self::new(RestClient::new(&config.rest_config())?))
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let products: Vec<Product> = self.client.get_json("products", &[]).await?;
        tracing::debug!(count = products.len(), "Fetched remote products");
        Ok(products)
    }

    async fn fetch_users(&self, limit: u32) -> CatalogResult<Vec<User>> {
        let users: Vec<User> = self
            .client
            .get_json("users", &[("limit", limit.to_string())])
            .await?;
        tracing::debug!(count = users.len(), "Fetched remote users");
        Ok(users)
    }
}
