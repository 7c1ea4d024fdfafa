//! API Module
//!
//! HTTP handlers and routing for the catalog REST facade.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /products` - Product list
//! - `GET /products/:id` - Product detail
//! - `GET /stats` - Aggregate statistics

pub mod handlers;
pub mod routes;

#[cfg(test)]
pub(crate) mod stub;

pub use handlers::*;
pub use routes::create_router;
