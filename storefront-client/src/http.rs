//! HTTP client for the catalog API

use crate::{ClientConfig, ClientError, ClientResult, Product, ProductId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Read-only access to the product catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products` - the complete collection, no pagination
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /products/{id}` - `ClientError::NotFound` when the product does not exist
    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product>;
}

/// Network catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request, `None` for an empty (or `null`) success body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        // The public catalog answers unknown ids with 200 and an empty body
        let body = text.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(body)?))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let entries: Vec<serde_json::Value> = self
            .get("products")
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Empty product list body".to_string()))?;

        // Unparseable entries (e.g. a price outside Decimal range) are dropped one by one
        let total = entries.len();
        let products: Vec<Product> = entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.get("id").cloned();
                serde_json::from_value(entry)
                    .inspect_err(|e| {
                        tracing::warn!(id = ?id, error = %e, "Skipping malformed product");
                    })
                    .ok()
            })
            .collect();
        tracing::debug!(
            count = products.len(),
            skipped = total - products.len(),
            "Fetched catalog"
        );
        Ok(products)
    }

    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product> {
        self.get(&format!("products/{}", id))
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("product {}", id)))
    }
}
