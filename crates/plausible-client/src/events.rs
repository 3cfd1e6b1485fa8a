//! Events API request building
//!
//! Events are not under the versioned API root: `https://plausible.io/api/v1/`
//! records events at `https://plausible.io/api/event`.

use lazy_static::lazy_static;
use plausible_protocol::{EventRequest, InvalidQuery};
use regex::Regex;
use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderName, HeaderValue, USER_AGENT};

use crate::{PlausibleError, PlausibleResult};

const EVENT_ENDPOINT: &str = "api/event";

lazy_static! {
    static ref API_VERSION_SEGMENT: Regex = Regex::new(r"/api/v\d+/").unwrap();
}

/// Event endpoint URL for a versioned API base URL
pub(crate) fn event_url(base_url: &str) -> String {
    let root = API_VERSION_SEGMENT.replace_all(base_url, "/");
    format!("{}{}", root, EVENT_ENDPOINT)
}

/// Attach the visitor context of `request` to an authenticated POST
pub(crate) fn apply_event_headers(
    mut builder: RequestBuilder,
    request: &EventRequest,
) -> PlausibleResult<RequestBuilder> {
    builder = builder.header(USER_AGENT, header_value("User-Agent", &request.user_agent)?);

    if request.debug {
        builder = builder.header("X-Debug-Request", "true");
    }

    if let Some(forwarded_for) = request.x_forwarded_for.as_deref().filter(|v| !v.is_empty()) {
        builder = builder.header("X-Forwarded-For", header_value("X-Forwarded-For", forwarded_for)?);
    }

    for (name, value) in &request.additional_headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            PlausibleError::InvalidQuery(InvalidQuery::new(format!(
                "invalid header name for the event request: {}",
                name
            )))
        })?;
        builder = builder.header(header_name, header_value(name, value)?);
    }

    Ok(builder.json(&request.data))
}

fn header_value(name: &str, value: &str) -> PlausibleResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        PlausibleError::InvalidQuery(InvalidQuery::new(format!(
            "invalid value for header {} in the event request",
            name
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_url_strips_api_version() {
        assert_eq!(
            event_url("https://plausible.io/api/v1/"),
            "https://plausible.io/api/event"
        );
        assert_eq!(
            event_url("https://stats.example.com/analytics/api/v2/"),
            "https://stats.example.com/analytics/api/event"
        );
    }

    #[test]
    fn test_event_url_without_version_segment() {
        assert_eq!(
            event_url("http://localhost:8000/"),
            "http://localhost:8000/api/event"
        );
    }

    #[test]
    fn test_header_value_rejects_newlines() {
        assert!(header_value("User-Agent", "Mozilla/5.0").is_ok());
        assert!(matches!(
            header_value("User-Agent", "bad\nvalue"),
            Err(PlausibleError::InvalidQuery(_))
        ));
    }
}
