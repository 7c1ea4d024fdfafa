//! Cache Module
//!
//! Provides in-memory caching with a fixed TTL and lazy expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

// == Cache Keys ==
/// Key for the mapped product list
pub const PRODUCTS_KEY: &str = "products";

/// Key for the aggregate statistics
pub const STATS_KEY: &str = "stats";

/// Key for a single product's raw detail
pub fn product_key(id: &str) -> String {
    format!("product:{}", id)
}
