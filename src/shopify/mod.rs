//! Shopify Module
//!
//! Upstream access to the Shopify Admin GraphQL API.

mod client;
mod queries;
mod types;

pub use client::{
    admin_graphql_url, normalize_store_host, sort_by_title, ProductSource, ShopifyClient,
};
pub use queries::PAGE_SIZE;
pub use types::{Money, PriceRange, ProductNode};
