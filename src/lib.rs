//! Catalog Summary - A caching REST facade over the Shopify Admin GraphQL API
//!
//! Serves the product list, single product detail and catalog statistics,
//! each cached in memory for a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod sdk;
pub mod shopify;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};
