//! Shopify Admin GraphQL client
//!
//! Issues the paginated product list query and the single product detail
//! query. No retries: the first failure is returned to the caller.

use std::time::Duration;

use async_trait::async_trait;
use icu_collator::{Collator, CollatorOptions, Strength};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::credentials::Credential;
use crate::error::{AppError, Result};
use crate::shopify::queries::{PAGE_SIZE, PRODUCTS_QUERY, PRODUCT_BY_ID_QUERY};
use crate::shopify::types::{
    GraphQlEnvelope, ProductConnection, ProductData, ProductNode, ProductsData,
};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Source of catalog data for the HTTP handlers.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Every product in the catalog, ordered by title ignoring case and accents.
    async fn fetch_all_products(&self) -> Result<Vec<ProductNode>>;

    /// Raw detail object for one product, `None` when upstream has no such id.
    async fn fetch_product_by_id(&self, id: &str) -> Result<Option<Value>>;
}

/// HTTP client bound to one store's Admin GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: Client,
    endpoint: String,
}

impl ShopifyClient {
    /// Builds a client for the store named in `credential`.
    pub fn new(credential: &Credential, api_version: &str, timeout: Duration) -> Result<Self> {
        let host = normalize_store_host(&credential.store);
        if host.is_empty() {
            return Err(AppError::InvalidCredential(
                "store domain is empty".to_string(),
            ));
        }
        let endpoint = admin_graphql_url(&host, api_version);

        info!(host = %host, endpoint = %endpoint, "Shopify client configured");
        Self::with_endpoint(endpoint, &credential.access_token, timeout)
    }

    /// Builds a client posting to an explicit endpoint URL.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut token = header::HeaderValue::from_str(access_token).map_err(|_| {
            AppError::InvalidCredential("access token is not a valid header value".to_string())
        })?;
        token.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one GraphQL document and decodes `data` into `T`.
    async fn post_query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let mut envelope: GraphQlEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::UpstreamDecode(format!("invalid JSON envelope: {}", e)))?;

        if let Some(errors) = envelope.take_errors() {
            return Err(AppError::UpstreamQuery(errors));
        }

        let data = envelope
            .data
            .ok_or_else(|| AppError::UpstreamDecode("no data in GraphQL response".to_string()))?;
        serde_json::from_value(data).map_err(|e| AppError::UpstreamDecode(e.to_string()))
    }
}

#[async_trait]
impl ProductSource for ShopifyClient {
    async fn fetch_all_products(&self) -> Result<Vec<ProductNode>> {
        let mut all = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let data: ProductsData = self
                .post_query(
                    PRODUCTS_QUERY,
                    json!({ "first": PAGE_SIZE, "after": after }),
                )
                .await?;
            let ProductConnection { edges, page_info } = data.products;

            debug!(
                page_len = edges.len(),
                has_next_page = page_info.has_next_page,
                "fetched products page"
            );
            all.extend(edges.into_iter().map(|edge| edge.node));

            match page_info.end_cursor {
                Some(cursor) if page_info.has_next_page => after = Some(cursor),
                _ => break,
            }
        }

        sort_by_title(&mut all)?;
        info!(count = all.len(), "fetched all products");
        Ok(all)
    }

    async fn fetch_product_by_id(&self, id: &str) -> Result<Option<Value>> {
        let data: ProductData = self
            .post_query(PRODUCT_BY_ID_QUERY, json!({ "id": id }))
            .await?;
        Ok(data.product.filter(|product| !product.is_null()))
    }
}

/// Strips whitespace, an `http(s)://` prefix and trailing slashes.
pub fn normalize_store_host(store: &str) -> String {
    let raw = store.trim();
    let lower = raw.to_ascii_lowercase();
    let without_scheme = if lower.starts_with("https://") {
        &raw["https://".len()..]
    } else if lower.starts_with("http://") {
        &raw["http://".len()..]
    } else {
        raw
    };
    without_scheme.trim_end_matches('/').to_string()
}

pub fn admin_graphql_url(host: &str, api_version: &str) -> String {
    format!("https://{}/admin/api/{}/graphql.json", host, api_version)
}

/// Global, stable ordering by title under root-locale collation.
///
/// Primary strength: case and accents are ignored, so "apple", "Éclair"
/// and "Zebra" sort alphabetically. Titles that compare equal keep their
/// upstream order.
pub fn sort_by_title(nodes: &mut [ProductNode]) -> Result<()> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    let collator = Collator::try_new(&Default::default(), options)
        .map_err(|e| AppError::Collation(format!("{:?}", e)))?;

    nodes.sort_by(|a, b| collator.compare(&a.title, &b.title));
    Ok(())
}
