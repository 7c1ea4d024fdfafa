//! Consumer SDK
//!
//! Typed HTTP client for the service's three catalog endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Product, ProductStats};

const SDK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for a running catalog summary service.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: Client,
    base_url: String,
}

impl SummaryClient {
    /// Creates a client rooted at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SdkError> {
        let http = Client::builder().timeout(SDK_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, SdkError> {
        self.get("/products").await
    }

    /// Raw upstream detail for `id`, which is percent-encoded into the path.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Value, SdkError> {
        self.get(&format!("/products/{}", urlencoding::encode(id)))
            .await
    }

    pub async fn get_stats(&self) -> Result<ProductStats, SdkError> {
        self.get("/stats").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
