//! Sites provisioning: site creation, shared links and listing

use serde::{Deserialize, Serialize};

use crate::{InvalidQuery, PaginationMeta, QueryArgs};

/// Request to create a new site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSiteRequest {
    pub domain: String,
    /// IANA timezone name, e.g. "Europe/London". The API defaults to "Etc/UTC".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl CreateSiteRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.domain.is_empty() {
            return Err(InvalidQuery::new(
                "a domain must be specified in a request to create a new site",
            ));
        }
        Ok(())
    }

    pub fn to_form_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();
        args.add("domain", self.domain.as_str());

        if let Some(timezone) = self.timezone.as_deref().filter(|t| !t.is_empty()) {
            args.add("timezone", timezone);
        }

        args
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSiteResult {
    pub domain: String,
    pub timezone: String,
}

/// Request to create (or fetch, if it already exists) a shared link to a
/// site's dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkRequest {
    pub name: String,
}

impl SharedLinkRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.name.is_empty() {
            return Err(InvalidQuery::new(
                "a link name must be specified for a shared link request",
            ));
        }
        Ok(())
    }

    pub fn to_form_args(&self, site_id: &str) -> QueryArgs {
        [("site_id", site_id), ("name", self.name.as_str())]
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkResult {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteResult {
    pub domain: String,
    pub timezone: String,
}

/// One page of the sites listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSitesResult {
    pub sites: Vec<SiteResult>,
    pub meta: PaginationMeta,
}
