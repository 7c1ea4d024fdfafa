//! Response DTOs for the service API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! catalog payloads.

use serde::{Deserialize, Serialize};

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { ok: true }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed, client-safe error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_response_serialize() {
        let value = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }

    #[test]
    fn test_error_response_serialize() {
        let value = serde_json::to_value(ErrorResponse::new("Not found")).unwrap();
        assert_eq!(value, json!({ "error": "Not found" }));
    }
}
