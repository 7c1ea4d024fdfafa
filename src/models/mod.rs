//! Data models for the service API
//!
//! Public catalog shapes, their mapping from upstream nodes, and the
//! DTOs used for non-catalog HTTP responses.

pub mod product;
pub mod responses;

// Re-export commonly used types
pub use product::{compute_stats, map_node, map_nodes, Product, ProductStats};
pub use responses::{ErrorResponse, HealthResponse};
