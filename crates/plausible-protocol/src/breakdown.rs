//! Breakdown queries: metrics grouped by the values of one property

use serde::{Deserialize, Serialize};

use crate::{Filter, InvalidQuery, Metrics, MetricsResult, PropertyName, QueryArgs, TimePeriod};

/// Request for stats per value of a property, e.g. "visitors for each
/// operating system in the last month". `property` and `period` are
/// mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownQuery {
    pub property: Option<PropertyName>,
    pub period: TimePeriod,
    #[serde(default)]
    pub metrics: Metrics,
    /// Maximum number of entries per page
    #[serde(default)]
    pub limit: Option<u32>,
    /// Page number, starting at 1
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub filters: Filter,
}

impl BreakdownQuery {
    pub fn new(property: PropertyName, period: TimePeriod) -> Self {
        Self {
            property: Some(property),
            period,
            ..Default::default()
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_filters(mut self, filters: Filter) -> Self {
        self.filters = filters;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.property.is_none() {
            return Err(InvalidQuery::new(
                "a property must be specified for a breakdown query",
            ));
        }
        if self.period.is_empty() {
            return Err(InvalidQuery::new(
                "a period must be specified for a breakdown query",
            ));
        }
        Ok(())
    }

    /// Order: property, period, date, metrics, limit, page, filters.
    /// A zero limit or page counts as unset.
    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();

        if let Some(property) = &self.property {
            args.merge(property.to_query_args());
        }
        args.merge(self.period.to_query_args());

        if !self.metrics.is_empty() {
            args.merge(self.metrics.to_query_args());
        }

        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            args.add("limit", limit.to_string());
        }

        if let Some(page) = self.page.filter(|p| *p != 0) {
            args.add("page", page.to_string());
        }

        args.merge(self.filters.to_query_args());
        args
    }
}

/// Property value of a breakdown entry.
///
/// Only the field matching the queried property is filled; the others are
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyResult {
    pub name: String,
    pub page: String,
    pub source: String,
    pub referrer: String,
    pub utm_medium: String,
    pub utm_source: String,
    pub utm_campaign: String,
    pub device: String,
    pub browser: String,
    pub browser_version: String,
    pub os: String,
    pub os_version: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    #[serde(flatten)]
    pub property: PropertyResult,
    #[serde(flatten)]
    pub metrics: MetricsResult,
}

pub type BreakdownResult = Vec<BreakdownEntry>;

/// Wire shape of the breakdown endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBreakdownResponse {
    #[serde(default)]
    pub results: Vec<BreakdownEntry>,
}

impl From<RawBreakdownResponse> for BreakdownResult {
    fn from(raw: RawBreakdownResponse) -> Self {
        raw.results
    }
}
