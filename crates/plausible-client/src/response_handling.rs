//! Status checking and error extraction for API responses

use serde::Deserialize;

use crate::PlausibleError;

/// Error body the API sends with non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Turn a non-success response into the matching error.
///
/// A JSON `{"error": "..."}` body surfaces its message; anything else only
/// reports the status.
pub(crate) fn error_from_body(status: u16, body: &[u8]) -> PlausibleError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(api_error) => PlausibleError::Api {
            status,
            message: api_error.error,
        },
        Err(_) => PlausibleError::Status { status },
    }
}

/// Parse the plain-text integer the realtime visitors endpoint returns
pub(crate) fn parse_visitor_count(body: &[u8]) -> Result<u64, PlausibleError> {
    let text = String::from_utf8_lossy(body);
    text.trim().parse::<u64>().map_err(|_| {
        PlausibleError::InvalidResponse(format!("expected a visitor count, got {:?}", text))
    })
}
