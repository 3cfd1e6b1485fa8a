//! Event recording payloads

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::InvalidQuery;

/// Body of an event recording request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Domain of the site, as configured in Plausible
    pub domain: String,
    /// "pageview", or the name of a custom event
    pub name: String,
    /// URL of the page the event happened on
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Revenue>,
}

impl EventData {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Shortcut for a "pageview" event
    pub fn pageview(domain: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(domain, "pageview", url)
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_revenue(mut self, revenue: Revenue) -> Self {
        self.revenue = Some(revenue);
        self
    }
}

/// Revenue attached to a goal conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    /// ISO 4217 currency code, e.g. "EUR"
    pub currency: String,
    /// Decimal amount as a string, e.g. "19.99"
    pub amount: String,
}

impl Revenue {
    pub fn new(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: amount.into(),
        }
    }
}

/// An event plus the request context of the visitor that produced it.
///
/// Plausible derives the visitor identity from the user agent and client IP,
/// so both must be those of the original visitor, not of the server sending
/// the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRequest {
    pub data: EventData,
    /// User agent of the visitor. Mandatory.
    pub user_agent: String,
    /// Client IP chain of the visitor, sent as `X-Forwarded-For`
    pub x_forwarded_for: Option<String>,
    /// Extra headers, sent after the standard ones
    pub additional_headers: BTreeMap<String, String>,
    /// Ask the API to echo debugging information (`X-Debug-Request`)
    pub debug: bool,
}

impl EventRequest {
    pub fn new(data: EventData, user_agent: impl Into<String>) -> Self {
        Self {
            data,
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    pub fn with_forwarded_for(mut self, ip: impl Into<String>) -> Self {
        self.x_forwarded_for = Some(ip.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.insert(name.into(), value.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.user_agent.is_empty() {
            return Err(InvalidQuery::new(
                "missing user agent information for the event request",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_event_omits_optional_fields() {
        let data = EventData::pageview("example.com", "https://example.com/");
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "domain": "example.com",
                "name": "pageview",
                "url": "https://example.com/"
            })
        );
    }

    #[test]
    fn test_full_event_serialization() {
        let data = EventData::new("example.com", "Purchase", "https://example.com/checkout")
            .with_referrer("https://news.example/")
            .with_prop("plan", "pro")
            .with_revenue(Revenue::new("EUR", "19.99"));

        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "domain": "example.com",
                "name": "Purchase",
                "url": "https://example.com/checkout",
                "referrer": "https://news.example/",
                "props": {"plan": "pro"},
                "revenue": {"currency": "EUR", "amount": "19.99"}
            })
        );
    }

    #[test]
    fn test_event_request_requires_user_agent() {
        let data = EventData::pageview("example.com", "https://example.com/");
        assert!(EventRequest::new(data.clone(), "Mozilla/5.0").validate().is_ok());

        let err = EventRequest::new(data, "").validate().unwrap_err();
        assert!(err.reason.contains("user agent"));
    }
}
