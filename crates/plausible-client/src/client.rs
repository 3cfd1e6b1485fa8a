//! Client handle and HTTP transport

use plausible_protocol::{
    CreateSiteRequest, CreateSiteResult, EventRequest, ListSitesResult, Paginator, QueryArgs,
};
use reqwest::blocking::{multipart, RequestBuilder};
use reqwest::header::USER_AGENT;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::events::{apply_event_headers, event_url};
use crate::response_handling::error_from_body;
use crate::config::normalize_base_url;
use crate::{ClientConfig, PlausibleError, PlausibleResult, Site};

/// Handle to the Plausible API.
///
/// Holds only immutable configuration and a pooled HTTP client, so it is
/// cheap to clone and safe to share between threads. Constructing a client
/// does not perform any network requests.
#[derive(Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Client for the public API at [`crate::DEFAULT_BASE_URL`]
    pub fn new(token: impl Into<String>) -> PlausibleResult<Self> {
        Self::from_config(ClientConfig::new(token))
    }

    /// Client for a self-hosted instance or another API version.
    ///
    /// `base_url` must include the scheme and the API prefix, e.g.
    /// "https://plausible.example.com/api/v1/". The trailing `/` is optional.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> PlausibleResult<Self> {
        Self::from_config(ClientConfig::new(token).with_base_url(base_url))
    }

    /// Client from a full configuration. The base URL gets its trailing `/`
    /// here as well, since the config fields can be set directly.
    pub fn from_config(mut config: ClientConfig) -> PlausibleResult<Self> {
        config.base_url = normalize_base_url(config.base_url);
        config.validate()?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build().map_err(|e| {
            PlausibleError::Configuration(format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Client configured from `PLAUSIBLE_TOKEN` and `PLAUSIBLE_BASE_URL`
    pub fn from_env() -> PlausibleResult<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn token(&self) -> &SecretString {
        &self.config.token
    }

    /// Handle for the stats and shared link requests of one site
    pub fn site(&self, site_id: impl Into<String>) -> Site {
        Site::new(self.clone(), site_id.into())
    }

    /// Create a new site.
    ///
    /// Requires a token with access to the Sites API.
    pub fn create_new_site(&self, request: &CreateSiteRequest) -> PlausibleResult<CreateSiteResult> {
        request.validate()?;
        self.fetch_json(
            Method::POST,
            "sites",
            &QueryArgs::new(),
            Some(&request.to_form_args()),
        )
    }

    /// One page of the sites the token has access to
    pub fn list_sites(&self, paginator: &Paginator) -> PlausibleResult<ListSitesResult> {
        self.fetch_json(Method::GET, "sites", &paginator.to_query_args(), None)
    }

    /// Record an event on behalf of a visitor, returning the raw response body
    pub fn push_event(&self, request: &EventRequest) -> PlausibleResult<Vec<u8>> {
        request.validate()?;

        let url = event_url(&self.config.base_url);
        tracing::debug!(url = %url, name = %request.data.name, "recording event");

        let builder = self
            .http
            .post(&url)
            .bearer_auth(self.config.token.expose_secret());
        let builder = apply_event_headers(builder, request)?;

        self.send(builder, "api/event")
    }

    /// Send a request and decode the JSON body as `T`
    pub(crate) fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryArgs,
        form: Option<&QueryArgs>,
    ) -> PlausibleResult<T> {
        let body = self.execute(method, endpoint, query, form)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send one authenticated request to `endpoint` (relative to the base
    /// URL) and return the body of a successful response.
    ///
    /// Form fields, when present, are sent as `multipart/form-data`.
    pub(crate) fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryArgs,
        form: Option<&QueryArgs>,
    ) -> PlausibleResult<Vec<u8>> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!(
            method = %method,
            endpoint,
            params = query.len(),
            "sending request"
        );

        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(self.config.token.expose_secret())
            .header(USER_AGENT, &self.config.user_agent);

        if !query.is_empty() {
            builder = builder.query(&query.as_pairs());
        }

        if let Some(form) = form.filter(|f| !f.is_empty()) {
            let multipart = form.iter().fold(multipart::Form::new(), |acc, field| {
                acc.text(field.name.clone(), field.value.clone())
            });
            builder = builder.multipart(multipart);
        }

        self.send(builder, endpoint)
    }

    fn send(&self, builder: RequestBuilder, endpoint: &str) -> PlausibleResult<Vec<u8>> {
        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?;

        tracing::trace!(endpoint, status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "request rejected by the API");
            return Err(error_from_body(status.as_u16(), &body));
        }

        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BASE_URL;

    #[test]
    fn test_client_with_default_base_url() {
        let client = Client::new("a").unwrap();
        assert_eq!(client.token().expose_secret(), "a");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let with_slash = Client::with_base_url("a", "https://mydomain.com/api/v1/").unwrap();
        assert_eq!(with_slash.base_url(), "https://mydomain.com/api/v1/");

        let without_slash = Client::with_base_url("a", "https://mydomain.com/api/v1").unwrap();
        assert_eq!(without_slash.base_url(), "https://mydomain.com/api/v1/");
    }

    #[test]
    fn test_from_config_adds_trailing_slash_to_literal_base_url() {
        let config = ClientConfig {
            base_url: "https://mydomain.com/api/v1".to_string(),
            ..ClientConfig::new("a")
        };
        let client = Client::from_config(config).unwrap();
        assert_eq!(client.base_url(), "https://mydomain.com/api/v1/");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        assert!(Client::new("").is_err());
        assert!(Client::with_base_url("a", "mydomain.com").is_err());
    }

    #[test]
    fn test_construction_errors_are_local() {
        for result in [
            Client::new(""),
            Client::from_config(ClientConfig::new("a").with_timeout(0)),
        ] {
            let error = result.unwrap_err();
            assert!(matches!(error, PlausibleError::Configuration(_)));
            assert!(error.is_local());
        }
    }

    #[test]
    fn test_site_handle_keeps_id() {
        let client = Client::new("a").unwrap();
        assert_eq!(client.site("example.com").id(), "example.com");
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
        assert_send_sync::<Site>();
    }
}
