//! Filters over properties to narrow down stats queries
//!
//! A filter is a logical AND of `name==value` clauses joined with `;`.
//! Values are not escaped: a value containing `;` or `==` produces a filter
//! the API will read differently, so callers must avoid them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{ParseError, Property, PropertyName, QueryArgs};

/// Builder methods take `self` by value, so a base filter can be cloned and
/// extended along different branches without affecting the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub properties: Vec<Property>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }

    pub fn by(mut self, name: PropertyName, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    /// "pageview" is the reserved event name; anything else is a custom event
    pub fn by_event_name(self, event_name: impl Into<String>) -> Self {
        self.by(PropertyName::EventName, event_name)
    }

    pub fn by_event_page(self, page: impl Into<String>) -> Self {
        self.by(PropertyName::EventPage, page)
    }

    pub fn by_visit_source(self, source: impl Into<String>) -> Self {
        self.by(PropertyName::VisitSource, source)
    }

    pub fn by_visit_referrer(self, referrer: impl Into<String>) -> Self {
        self.by(PropertyName::VisitReferrer, referrer)
    }

    pub fn by_visit_utm_medium(self, utm_medium: impl Into<String>) -> Self {
        self.by(PropertyName::VisitUtmMedium, utm_medium)
    }

    pub fn by_visit_utm_source(self, utm_source: impl Into<String>) -> Self {
        self.by(PropertyName::VisitUtmSource, utm_source)
    }

    pub fn by_visit_utm_campaign(self, utm_campaign: impl Into<String>) -> Self {
        self.by(PropertyName::VisitUtmCampaign, utm_campaign)
    }

    pub fn by_visit_device(self, device: impl Into<String>) -> Self {
        self.by(PropertyName::VisitDevice, device)
    }

    pub fn by_visit_browser(self, browser: impl Into<String>) -> Self {
        self.by(PropertyName::VisitBrowser, browser)
    }

    pub fn by_visit_browser_version(self, browser_version: impl Into<String>) -> Self {
        self.by(PropertyName::VisitBrowserVersion, browser_version)
    }

    pub fn by_visit_os(self, operating_system: impl Into<String>) -> Self {
        self.by(PropertyName::VisitOs, operating_system)
    }

    pub fn by_visit_os_version(self, os_version: impl Into<String>) -> Self {
        self.by(PropertyName::VisitOsVersion, os_version)
    }

    /// Country as an ISO 3166-1 alpha-2 code
    pub fn by_visit_country(self, country: impl Into<String>) -> Self {
        self.by(PropertyName::VisitCountry, country)
    }

    pub fn by_custom_property(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.by(PropertyName::custom(name), value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_filter_string(&self) -> String {
        self.properties
            .iter()
            .map(Property::to_filter_string)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Empty filters contribute no arguments
    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();
        if !self.is_empty() {
            args.add("filters", self.to_filter_string());
        }
        args
    }
}

impl FromIterator<Property> for Filter {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self::from_properties(iter)
    }
}

impl FromStr for Filter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(';').map(str::parse::<Property>).collect()
    }
}
