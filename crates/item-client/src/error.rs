//! Client Errors
//!
//! Failures of a request against the collection endpoint.

use serde::{Deserialize, Serialize};

/// Common result type for collection operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The response body was not the expected JSON
    Decode(String),
    /// No record with the requested id
    NotFound(u32),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::NotFound(id) => write!(f, "Item {} not found", id),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "Unexpected HTTP status: 500");
        assert_eq!(ApiError::NotFound(9).to_string(), "Item 9 not found");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
