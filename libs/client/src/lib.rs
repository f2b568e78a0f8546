//! Typed client for the catalog API
//!
//! A thin wrapper over the REST endpoints: one request per call, no retry,
//! no backoff. Non-OK responses are decoded from the API's `{"error": ...}`
//! envelope into [`ClientError::Api`].

pub mod error;
pub mod models;

use std::env;

use error::{ClientError, ClientResult};
use models::{ErrorResponse, HealthResponse, MessageResponse, Product, ProductPayload};

/// Default API base URL for local development
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from environment variables
    ///
    /// # Environment Variables
    /// - `CATALOG_API_BASE_URL`: API base URL (default: "http://localhost:5000")
    pub fn from_env() -> Self {
        let base_url =
            env::var("CATALOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode the error envelope of a non-OK response
    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(envelope) => envelope.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Get all products, newest first
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let response = self.http.get(self.url("/api/products")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        let response = self
            .http
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Create a new product and return the created row
    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        let response = self
            .http
            .post(self.url("/api/products"))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Overwrite all mutable fields of a product
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> ClientResult<MessageResponse> {
        let response = self
            .http
            .put(self.url(&format!("/api/products/{id}")))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Delete a product by ID
    pub async fn delete_product(&self, id: i64) -> ClientResult<MessageResponse> {
        let response = self
            .http
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Get the distinct categories across all products
    pub async fn categories(&self) -> ClientResult<Vec<String>> {
        let response = self.http.get(self.url("/api/categories")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Probe the service liveness endpoint
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
