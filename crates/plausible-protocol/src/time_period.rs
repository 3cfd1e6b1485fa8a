//! Time periods and intervals for stats queries

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Date, ParseError, QueryArgs};

/// Granularity of the data points returned by a time series query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInterval {
    /// One data point per day
    Date,
    /// One data point per month
    Month,
}

impl TimeInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Month => "month",
        }
    }

    pub fn to_query_args(&self) -> QueryArgs {
        [("interval", self.as_str())].into_iter().collect()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The window of time a query covers.
///
/// Relative periods ("last 7 days", "this month") are anchored at today
/// unless a date is attached with [`TimePeriod::of_date`]. A custom period
/// carries both ends of the range in `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePeriod {
    /// Period token, e.g. "6mo", "12mo", "7d", "30d", "month", "day" or "custom"
    pub period: String,
    /// Pre-formatted date the period refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TimePeriod {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            date: None,
        }
    }

    pub fn last_6_months() -> Self {
        Self::new("6mo")
    }

    pub fn last_12_months() -> Self {
        Self::new("12mo")
    }

    pub fn last_7_days() -> Self {
        Self::new("7d")
    }

    pub fn last_30_days() -> Self {
        Self::new("30d")
    }

    /// The current month, or the month of the attached date
    pub fn month() -> Self {
        Self::new("month")
    }

    /// Today, or the attached date
    pub fn day() -> Self {
        Self::new("day")
    }

    /// Explicit range between two dates, both inclusive
    pub fn custom(from: Date, to: Date) -> Self {
        Self {
            period: "custom".to_string(),
            date: Some(format!("{},{}", from, to)),
        }
    }

    /// Alias of [`TimePeriod::from_date`]
    pub fn of_date(self, date: Date) -> Self {
        self.from_date(date)
    }

    pub fn from_date(mut self, date: Date) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.period.is_empty()
    }

    pub fn to_query_args(&self) -> QueryArgs {
        let mut args = QueryArgs::new();
        args.add("period", self.period.as_str());

        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            args.add("date", date);
        }

        args
    }

    pub fn from_query_args(args: &QueryArgs) -> Result<Self, ParseError> {
        let period = args
            .get("period")
            .ok_or(ParseError::MissingArgument("period"))?;

        Ok(Self {
            period: period.to_string(),
            date: args.get("date").map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_period_tokens() {
        assert_eq!(TimePeriod::last_6_months().period, "6mo");
        assert_eq!(TimePeriod::last_12_months().period, "12mo");
        assert_eq!(TimePeriod::last_7_days().period, "7d");
        assert_eq!(TimePeriod::last_30_days().period, "30d");
        assert_eq!(TimePeriod::month().period, "month");
        assert_eq!(TimePeriod::day().period, "day");
    }

    #[test]
    fn test_custom_period_joins_dates() {
        let period = TimePeriod::custom(Date::new(2021, 1, 1), Date::new(2021, 2, 1));
        assert_eq!(period.period, "custom");
        assert_eq!(period.date.as_deref(), Some("2021-01-01,2021-02-01"));
    }

    #[test]
    fn test_period_without_date_has_single_arg() {
        let args = TimePeriod::day().to_query_args();
        assert_eq!(args.as_pairs(), vec![("period", "day")]);
    }

    #[test]
    fn test_period_with_date() {
        let args = TimePeriod::month()
            .of_date(Date::new(2021, 3, 1))
            .to_query_args();
        assert_eq!(args.as_pairs(), vec![("period", "month"), ("date", "2021-03-01")]);
    }

    #[test]
    fn test_default_period_is_empty() {
        assert!(TimePeriod::default().is_empty());
        assert!(!TimePeriod::day().is_empty());
    }

    #[test]
    fn test_period_round_trip() {
        let period = TimePeriod::last_7_days().from_date(Date::new(2022, 5, 9));
        let recovered = TimePeriod::from_query_args(&period.to_query_args()).unwrap();
        assert_eq!(recovered, period);
    }

    #[test]
    fn test_from_query_args_requires_period() {
        let args: QueryArgs = [("date", "2021-01-01")].into_iter().collect();
        assert_eq!(
            TimePeriod::from_query_args(&args),
            Err(ParseError::MissingArgument("period"))
        );
    }

    #[test]
    fn test_interval_query_args() {
        assert_eq!(
            TimeInterval::Month.to_query_args().as_pairs(),
            vec![("interval", "month")]
        );
    }
}
