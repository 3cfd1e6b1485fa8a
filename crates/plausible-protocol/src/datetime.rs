//! Calendar dates and times in the formats the Plausible API uses

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// A calendar date, rendered as `YYYY-MM-DD`.
///
/// No calendar validation happens here; the API rejects impossible dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    /// Day of month (1-31)
    pub day: u32,
    /// Month of year (1-12)
    pub month: u32,
    pub year: i32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedDate(s.to_string());
        let mut parts = s.trim().splitn(3, '-');

        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;

        Ok(Self { day, month, year })
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

/// A time of day, rendered as `HH:MM:SS`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Time {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedTime(s.to_string());
        let mut parts = s.trim().splitn(3, ':');

        let hour: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let minute: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let second: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;

        Ok(Self {
            hour,
            minute,
            second,
        })
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// A date and a time of day without timezone, rendered as `YYYY-MM-DD HH:MM:SS`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| ParseError::MalformedDate(s.to_string()))?;

        Ok(Self {
            date: date.parse()?,
            time: time.parse()?,
        })
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self {
            date: datetime.date().into(),
            time: datetime.time().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_zero_pads_day_and_month() {
        let date = Date {
            day: 1,
            month: 2,
            year: 2021,
        };
        assert_eq!(date.to_string(), "2021-02-01");
    }

    #[test]
    fn test_date_with_double_digits() {
        assert_eq!(Date::new(2021, 12, 31).to_string(), "2021-12-31");
    }

    #[test]
    fn test_time_zero_pads_fields() {
        assert_eq!(Time::new(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(Time::new(10, 20, 30).to_string(), "10:20:30");
    }

    #[test]
    fn test_datetime_joins_with_single_space() {
        let datetime = DateTime {
            date: Date::new(2021, 2, 1),
            time: Time::new(9, 5, 0),
        };
        assert_eq!(datetime.to_string(), "2021-02-01 09:05:00");
    }

    #[test]
    fn test_parse_date_and_datetime() {
        assert_eq!("2021-02-01".parse::<Date>().unwrap(), Date::new(2021, 2, 1));

        let datetime: DateTime = "2021-02-01 09:05:00".parse().unwrap();
        assert_eq!(datetime.date, Date::new(2021, 2, 1));
        assert_eq!(datetime.time, Time::new(9, 5, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "2021/02/01".parse::<Date>(),
            Err(ParseError::MalformedDate(_))
        ));
        assert!(matches!(
            "9h05".parse::<Time>(),
            Err(ParseError::MalformedTime(_))
        ));
    }

    #[test]
    fn test_from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap();
        let datetime = DateTime::from(naive);
        assert_eq!(datetime.to_string(), "2021-03-04 05:06:07");
    }
}
