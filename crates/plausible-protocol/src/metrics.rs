//! Metrics that can be requested from the stats API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ParseError, QueryArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Number of unique visitors
    Visitors,
    /// Number of page views
    #[serde(rename = "pageviews")]
    PageViews,
    /// Percentage of single-page visits
    BounceRate,
    /// Average visit duration in seconds
    VisitDuration,
    /// Number of visits/sessions
    Visits,
    /// Number of events (page views plus custom events)
    Events,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visitors => "visitors",
            Self::PageViews => "pageviews",
            Self::BounceRate => "bounce_rate",
            Self::VisitDuration => "visit_duration",
            Self::Visits => "visits",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "visitors" => Ok(Self::Visitors),
            "pageviews" => Ok(Self::PageViews),
            "bounce_rate" => Ok(Self::BounceRate),
            "visit_duration" => Ok(Self::VisitDuration),
            "visits" => Ok(Self::Visits),
            "events" => Ok(Self::Events),
            other => Err(ParseError::UnknownMetric(other.to_string())),
        }
    }
}

/// Ordered list of metrics; the order given is the order sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(pub Vec<Metric>);

impl Metrics {
    pub fn new(metrics: impl IntoIterator<Item = Metric>) -> Self {
        Self(metrics.into_iter().collect())
    }

    /// Visitors, page views, bounce rate, visit duration and visits.
    ///
    /// `Events` is left out since not every query accepts it.
    pub fn all() -> Self {
        Self(vec![
            Metric::Visitors,
            Metric::PageViews,
            Metric::BounceRate,
            Metric::VisitDuration,
            Metric::Visits,
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains(&metric)
    }

    pub fn to_query_value(&self) -> String {
        self.0
            .iter()
            .map(Metric::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn to_query_args(&self) -> QueryArgs {
        [("metrics", self.to_query_value())].into_iter().collect()
    }
}

impl From<Vec<Metric>> for Metrics {
    fn from(metrics: Vec<Metric>) -> Self {
        Self(metrics)
    }
}

impl FromIterator<Metric> for Metrics {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Metrics {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(str::parse::<Metric>).collect()
    }
}
