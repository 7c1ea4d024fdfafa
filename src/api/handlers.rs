//! API Handlers
//!
//! HTTP request handlers for each endpoint. Every data handler is a
//! read-through: cache hit returns the stored payload, miss goes upstream
//! and stores the result for the configured TTL.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{product_key, CacheStore, PRODUCTS_KEY, STATS_KEY};
use crate::error::{AppError, Result};
use crate::models::{compute_stats, map_nodes, HealthResponse, Product, ProductStats};
use crate::shopify::ProductSource;

/// Payloads held in the response cache, one variant per endpoint.
#[derive(Debug, Clone)]
pub enum CachedResponse {
    Products(Vec<Product>),
    Stats(ProductStats),
    ProductDetail(Value),
}

/// Application state shared across all handlers.
///
/// The cache lock is never held across an upstream call, so concurrent
/// misses on the same key each fetch and the last write wins.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<CacheStore<CachedResponse>>>,
    /// Upstream catalog
    pub source: Arc<dyn ProductSource>,
}

impl AppState {
    /// Creates a new AppState with an empty cache using `cache_ttl`.
    pub fn new(source: Arc<dyn ProductSource>, cache_ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(CacheStore::new(cache_ttl))),
            source,
        }
    }

    async fn cached(&self, key: &str) -> Option<CachedResponse> {
        // Write lock: an expired read evicts.
        self.cache.write().await.get(key)
    }

    async fn store(&self, key: impl Into<String>, value: CachedResponse) {
        self.cache.write().await.set(key, value);
    }
}

/// Handler for GET /products
pub async fn products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    if let Some(CachedResponse::Products(products)) = state.cached(PRODUCTS_KEY).await {
        return Ok(Json(products));
    }

    let nodes = state.source.fetch_all_products().await?;
    let products = map_nodes(&nodes);

    state
        .store(PRODUCTS_KEY, CachedResponse::Products(products.clone()))
        .await;
    Ok(Json(products))
}

/// Handler for GET /products/:id
///
/// The id arrives percent-decoded and is passed upstream untouched. An id
/// that does not decode to UTF-8 fails like any other request error.
pub async fn product_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(id) = path.map_err(|rejection| AppError::InvalidPath(rejection.body_text()))?;
    let key = product_key(&id);
    if let Some(CachedResponse::ProductDetail(product)) = state.cached(&key).await {
        return Ok(Json(product));
    }

    let product = state
        .source
        .fetch_product_by_id(&id)
        .await?
        .ok_or(AppError::NotFound(id))?;

    state
        .store(key, CachedResponse::ProductDetail(product.clone()))
        .await;
    Ok(Json(product))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<ProductStats>> {
    if let Some(CachedResponse::Stats(stats)) = state.cached(STATS_KEY).await {
        return Ok(Json(stats));
    }

    let nodes = state.source.fetch_all_products().await?;
    let stats = compute_stats(&map_nodes(&nodes));

    state.store(STATS_KEY, CachedResponse::Stats(stats.clone())).await;
    Ok(Json(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
