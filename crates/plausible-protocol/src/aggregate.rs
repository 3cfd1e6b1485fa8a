//! Aggregate queries: metrics summed or averaged over one period

use serde::{Deserialize, Serialize};

use crate::{Filter, InvalidQuery, Metrics, ParseError, QueryArgs, TimePeriod};

const COMPARE_PREVIOUS_PERIOD: &str = "previous_period";

/// Request for metrics aggregated over a period of time, e.g. "total number
/// of visitors today". `period` and at least one metric are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateQuery {
    pub period: TimePeriod,
    pub metrics: Metrics,
    #[serde(default)]
    pub filters: Filter,
    /// Include the change relative to the previous period of the same length
    #[serde(default)]
    pub compare_previous_period: bool,
}

impl AggregateQuery {
    pub fn new(period: TimePeriod, metrics: Metrics) -> Self {
        Self {
            period,
            metrics,
            ..Default::default()
        }
    }

    pub fn with_filters(mut self, filters: Filter) -> Self {
        self.filters = filters;
        self
    }

    pub fn compare_previous_period(mut self, compare: bool) -> Self {
        self.compare_previous_period = compare;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.period.is_empty() {
            return Err(InvalidQuery::new(
                "a period must be specified for an aggregate query",
            ));
        }
        if self.metrics.is_empty() {
            return Err(InvalidQuery::new(
                "at least one metric must be specified for an aggregate query",
            ));
        }
        Ok(())
    }

    /// Order: period, date, metrics, filters, compare
    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();

        args.merge(self.period.to_query_args());
        args.merge(self.metrics.to_query_args());
        args.merge(self.filters.to_query_args());

        if self.compare_previous_period {
            args.add("compare", COMPARE_PREVIOUS_PERIOD);
        }

        args
    }

    pub fn from_query_args(args: &QueryArgs) -> Result<Self, ParseError> {
        Ok(Self {
            period: TimePeriod::from_query_args(args)?,
            metrics: args.get("metrics").unwrap_or_default().parse()?,
            filters: args.get("filters").unwrap_or_default().parse()?,
            compare_previous_period: args.get("compare") == Some(COMPARE_PREVIOUS_PERIOD),
        })
    }
}

/// Result of an aggregate query.
///
/// Only the metrics that were requested carry data; the `_change` fields are
/// only filled when the previous period comparison was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub bounce_rate: f64,
    pub bounce_rate_change: f64,
    pub events: i64,
    pub events_change: i64,
    pub pageviews: i64,
    pub pageviews_change: i64,
    pub visit_duration: f64,
    pub visit_duration_change: f64,
    pub visitors: i64,
    pub visitors_change: i64,
    pub visits: i64,
    pub visits_change: i64,
}

/// A metric as the API reports it in aggregate responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RawMetricValue<T> {
    #[serde(default)]
    pub value: Option<T>,
    #[serde(default)]
    pub change: Option<T>,
}

impl<T: Copy + Default> RawMetricValue<T> {
    fn value(&self) -> T {
        self.value.unwrap_or_default()
    }

    fn change(&self) -> T {
        self.change.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawAggregateMetrics {
    pub bounce_rate: Option<RawMetricValue<f64>>,
    pub events: Option<RawMetricValue<i64>>,
    pub pageviews: Option<RawMetricValue<i64>>,
    pub visit_duration: Option<RawMetricValue<f64>>,
    pub visitors: Option<RawMetricValue<i64>>,
    pub visits: Option<RawMetricValue<i64>>,
}

/// Wire shape of the aggregate endpoint response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAggregateResponse {
    #[serde(default)]
    pub results: Option<RawAggregateMetrics>,
}

impl From<RawAggregateResponse> for AggregateResult {
    /// A response without `results` (no data for the period) is all zeros.
    fn from(raw: RawAggregateResponse) -> Self {
        let Some(m) = raw.results else {
            return Self::default();
        };

        // A metric reported as null counts as zero, like a missing one
        let bounce_rate = m.bounce_rate.unwrap_or_default();
        let events = m.events.unwrap_or_default();
        let pageviews = m.pageviews.unwrap_or_default();
        let visit_duration = m.visit_duration.unwrap_or_default();
        let visitors = m.visitors.unwrap_or_default();
        let visits = m.visits.unwrap_or_default();

        Self {
            bounce_rate: bounce_rate.value(),
            bounce_rate_change: bounce_rate.change(),
            events: events.value(),
            events_change: events.change(),
            pageviews: pageviews.value(),
            pageviews_change: pageviews.change(),
            visit_duration: visit_duration.value(),
            visit_duration_change: visit_duration.change(),
            visitors: visitors.value(),
            visitors_change: visitors.change(),
            visits: visits.value(),
            visits_change: visits.change(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Date;

    fn full_query() -> AggregateQuery {
        AggregateQuery::new(
            TimePeriod::custom(Date::new(2021, 1, 1), Date::new(2021, 2, 1)),
            Metrics::all(),
        )
        .with_filters(Filter::new().by_visit_os("Windows").by_event_page("/"))
        .compare_previous_period(true)
    }

    #[test]
    fn test_validate_valid_query() {
        let query = AggregateQuery::new(TimePeriod::day(), Metrics::all());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_period() {
        let query = AggregateQuery {
            metrics: Metrics::all(),
            ..Default::default()
        };
        let err = query.validate().unwrap_err();
        assert!(!err.reason.is_empty());
        assert!(err.reason.contains("period"));
    }

    #[test]
    fn test_validate_missing_metrics() {
        let query = AggregateQuery::new(TimePeriod::day(), Metrics::default());
        let err = query.validate().unwrap_err();
        assert!(err.reason.contains("metric"));
    }

    #[test]
    fn test_query_args_order() {
        let expected: QueryArgs = [
            ("period", "custom"),
            ("date", "2021-01-01,2021-02-01"),
            ("metrics", "visitors,pageviews,bounce_rate,visit_duration,visits"),
            ("filters", "visit:os==Windows;event:page==/"),
            ("compare", "previous_period"),
        ]
        .into_iter()
        .collect();

        assert_eq!(full_query().to_query_args(), expected);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let query = AggregateQuery::new(TimePeriod::last_30_days(), Metrics::all());
        assert_eq!(
            query.to_query_args().as_pairs(),
            vec![
                ("period", "30d"),
                ("metrics", "visitors,pageviews,bounce_rate,visit_duration,visits")
            ]
        );
    }

    #[test]
    fn test_round_trip_through_query_args() {
        let query = full_query();
        let recovered = AggregateQuery::from_query_args(&query.to_query_args()).unwrap();
        assert_eq!(recovered, query);
    }

    #[test]
    fn test_absent_results_decode_to_zero() {
        let raw: RawAggregateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(AggregateResult::from(raw), AggregateResult::default());
    }

    #[test]
    fn test_empty_or_null_results_decode_to_zero() {
        for body in [r#"{"results": {}}"#, r#"{"results": null}"#] {
            let raw: RawAggregateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(AggregateResult::from(raw), AggregateResult::default(), "{}", body);
        }
    }

    #[test]
    fn test_null_metric_decodes_to_zero() {
        let body = r#"{"results": {"visitors": {"value": 3}, "bounce_rate": null}}"#;
        let raw: RawAggregateResponse = serde_json::from_str(body).unwrap();
        let result = AggregateResult::from(raw);

        assert_eq!(result.visitors, 3);
        assert_eq!(result.visitors_change, 0);
        assert_eq!(result.bounce_rate, 0.0);
        assert_eq!(result.bounce_rate_change, 0.0);
    }

    #[test]
    fn test_decode_flattens_value_and_change() {
        let body = r#"{
            "results": {
                "bounce_rate": {"value": 53.0, "change": -4},
                "pageviews": {"value": 1200, "change": 12},
                "visit_duration": {"value": 88.5, "change": null},
                "visitors": {"value": 400, "change": 5}
            }
        }"#;
        let raw: RawAggregateResponse = serde_json::from_str(body).unwrap();
        let result = AggregateResult::from(raw);

        assert_eq!(result.bounce_rate, 53.0);
        assert_eq!(result.bounce_rate_change, -4.0);
        assert_eq!(result.pageviews, 1200);
        assert_eq!(result.pageviews_change, 12);
        assert_eq!(result.visit_duration, 88.5);
        assert_eq!(result.visit_duration_change, 0.0);
        assert_eq!(result.visitors, 400);
        assert_eq!(result.visitors_change, 5);
        assert_eq!(result.visits, 0);
        assert_eq!(result.events, 0);
    }
}
