//! Time series queries: metrics for each sub-period of a period

use serde::{Deserialize, Serialize};

use crate::{Filter, InvalidQuery, Metrics, QueryArgs, TimeInterval, TimePeriod};

/// Request for a list of data points over a period, e.g. "visitors for each
/// day of the last month". Only `period` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeseriesQuery {
    pub period: TimePeriod,
    #[serde(default)]
    pub filters: Filter,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub interval: Option<TimeInterval>,
}

impl TimeseriesQuery {
    pub fn new(period: TimePeriod) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    pub fn with_filters(mut self, filters: Filter) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_interval(mut self, interval: TimeInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.period.is_empty() {
            return Err(InvalidQuery::new(
                "a period must be specified for a timeseries query",
            ));
        }
        Ok(())
    }

    /// Order: period, date, filters, metrics, interval
    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();

        args.merge(self.period.to_query_args());
        args.merge(self.filters.to_query_args());

        if !self.metrics.is_empty() {
            args.merge(self.metrics.to_query_args());
        }

        if let Some(interval) = self.interval {
            args.merge(interval.to_query_args());
        }

        args
    }
}

/// Metric values of one time series data point or breakdown entry.
///
/// Only the requested metrics carry data. Bounce rate and visit duration can
/// be null even when requested (e.g. a day without visits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsResult {
    #[serde(rename = "bounce_rate")]
    pub bounce_rate_raw: Option<f64>,
    pub pageviews: i64,
    #[serde(rename = "visit_duration")]
    pub visit_duration_raw: Option<f64>,
    pub visitors: i64,
    pub visits: i64,
    pub events: i64,
}

impl MetricsResult {
    /// Bounce rate, or 0 when the API reported none
    pub fn bounce_rate(&self) -> f64 {
        self.bounce_rate_raw.unwrap_or_default()
    }

    /// Visit duration, or 0 when the API reported none
    pub fn visit_duration(&self) -> f64 {
        self.visit_duration_raw.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesDataPoint {
    /// `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` for hourly data
    pub date: String,
    #[serde(flatten)]
    pub metrics: MetricsResult,
}

pub type TimeseriesResult = Vec<TimeseriesDataPoint>;

/// Wire shape of the timeseries endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimeseriesResponse {
    #[serde(default)]
    pub results: Vec<TimeseriesDataPoint>,
}

impl From<RawTimeseriesResponse> for TimeseriesResult {
    fn from(raw: RawTimeseriesResponse) -> Self {
        raw.results
    }
}
