//! Client error types

use plausible_protocol::InvalidQuery;
use thiserror::Error;

pub type PlausibleResult<T> = Result<T, PlausibleError>;

#[derive(Debug, Error)]
pub enum PlausibleError {
    /// The query failed local validation; nothing was sent
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status with a structured `{"error": ...}` body
    #[error("api error with code {status}: {message}")]
    Api { status: u16, message: String },

    /// Non-success status whose body could not be interpreted
    #[error("non-ok code received ({status}) from the API")]
    Status { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PlausibleError {
    /// HTTP status of a rejected request, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Status { status } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidQuery(_) | Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = PlausibleError::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(error.to_string(), "api error with code 401: Invalid API key");
        assert_eq!(error.status(), Some(401));
        assert!(!error.is_local());
    }

    #[test]
    fn test_invalid_query_is_local() {
        let error = PlausibleError::from(InvalidQuery::new("a period must be specified"));
        assert!(error.is_local());
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "invalid query: a period must be specified");
    }
}
