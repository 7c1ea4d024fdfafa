//! Error types for the catalog summary service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Body returned for every failure that is not an explicit not-found.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body returned when upstream has no product for the requested id.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// No credential row for the configured tenant
    #[error("No Shopify credentials found for id={id}")]
    CredentialMissing { id: i64 },

    /// The credential database could not be opened or queried
    #[error("Credential store error: {0}")]
    CredentialStore(#[from] rusqlite::Error),

    /// Stored credential cannot be used to build requests
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Upstream answered with a GraphQL `errors` payload
    #[error("Shopify GraphQL errors: {0}")]
    UpstreamQuery(serde_json::Value),

    /// Upstream answered with a non-success HTTP status
    #[error("Shopify responded with HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream envelope did not have the expected shape
    #[error("Unexpected Shopify response: {0}")]
    UpstreamDecode(String),

    /// Connection, timeout or body read failure
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Title collation data could not be loaded
    #[error("Collator unavailable: {0}")]
    Collation(String),

    /// Path parameter could not be decoded
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    /// Requested product does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            _ => {
                // Detail stays in the server log only.
                error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
