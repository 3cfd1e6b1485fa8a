//! Visit and event properties used in filters and breakdowns

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ParseError, QueryArgs};

const CUSTOM_PROPERTY_PREFIX: &str = "event:props:";

/// Name of a property, namespaced as `visit:*` or `event:*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PropertyName {
    /// Event name; "pageview" is reserved, anything else is a custom event
    EventName,
    /// Page path of the event
    EventPage,
    /// Source from utm_source, source or ref tags, or the Referer header
    VisitSource,
    /// Referer header value without scheme, e.g. "example.com/about"
    VisitReferrer,
    VisitUtmMedium,
    VisitUtmSource,
    VisitUtmCampaign,
    /// "Desktop", "Laptop", "Tablet" or "Mobile"
    VisitDevice,
    VisitBrowser,
    VisitBrowserVersion,
    VisitOs,
    VisitOsVersion,
    /// ISO 3166-1 alpha-2 country code
    VisitCountry,
    /// Custom event property, sent as `event:props:<name>`
    Custom(String),
}

impl PropertyName {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn as_wire_name(&self) -> String {
        let name = match self {
            Self::EventName => "event:name",
            Self::EventPage => "event:page",
            Self::VisitSource => "visit:source",
            Self::VisitReferrer => "visit:referrer",
            Self::VisitUtmMedium => "visit:utm_medium",
            Self::VisitUtmSource => "visit:utm_source",
            Self::VisitUtmCampaign => "visit:utm_campaign",
            Self::VisitDevice => "visit:device",
            Self::VisitBrowser => "visit:browser",
            Self::VisitBrowserVersion => "visit:browser_version",
            Self::VisitOs => "visit:os",
            Self::VisitOsVersion => "visit:os_version",
            Self::VisitCountry => "visit:country",
            Self::Custom(name) => return format!("{}{}", CUSTOM_PROPERTY_PREFIX, name),
        };
        name.to_string()
    }

    pub fn to_query_args(&self) -> QueryArgs {
        [("property", self.as_wire_name())].into_iter().collect()
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wire_name())
    }
}

impl FromStr for PropertyName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s {
            "event:name" => Self::EventName,
            "event:page" => Self::EventPage,
            "visit:source" => Self::VisitSource,
            "visit:referrer" => Self::VisitReferrer,
            "visit:utm_medium" => Self::VisitUtmMedium,
            "visit:utm_source" => Self::VisitUtmSource,
            "visit:utm_campaign" => Self::VisitUtmCampaign,
            "visit:device" => Self::VisitDevice,
            "visit:browser" => Self::VisitBrowser,
            "visit:browser_version" => Self::VisitBrowserVersion,
            "visit:os" => Self::VisitOs,
            "visit:os_version" => Self::VisitOsVersion,
            "visit:country" => Self::VisitCountry,
            other => match other.strip_prefix(CUSTOM_PROPERTY_PREFIX) {
                Some(custom) if !custom.is_empty() => Self::Custom(custom.to_string()),
                _ => return Err(ParseError::UnknownProperty(other.to_string())),
            },
        };
        Ok(name)
    }
}

impl From<PropertyName> for String {
    fn from(name: PropertyName) -> Self {
        name.as_wire_name()
    }
}

impl TryFrom<String> for PropertyName {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A property name paired with a value, rendered as `name==value`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub name: PropertyName,
    pub value: String,
}

impl Property {
    pub fn new(name: PropertyName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(PropertyName::custom(name), value)
    }

    pub fn to_filter_string(&self) -> String {
        format!("{}=={}", self.name, self.value)
    }
}

impl FromStr for Property {
    type Err = ParseError;

    /// Splits on the first `==`; the value keeps anything after it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once("==")
            .ok_or_else(|| ParseError::MalformedFilter(s.to_string()))?;

        Ok(Self {
            name: name.parse()?,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_property() {
        let property = Property::custom("myproperty", "profile");
        assert_eq!(property.name, PropertyName::Custom("myproperty".to_string()));
        assert_eq!(property.name.to_string(), "event:props:myproperty");
        assert_eq!(property.value, "profile");
        assert_eq!(property.to_filter_string(), "event:props:myproperty==profile");
    }

    #[test]
    fn test_builtin_property_filter_string() {
        let property = Property::new(PropertyName::VisitCountry, "PT");
        assert_eq!(property.to_filter_string(), "visit:country==PT");
    }

    #[test]
    fn test_property_name_query_args() {
        assert_eq!(
            PropertyName::VisitBrowser.to_query_args().as_pairs(),
            vec![("property", "visit:browser")]
        );
    }

    #[test]
    fn test_parse_property_names() {
        assert_eq!(
            "visit:utm_campaign".parse::<PropertyName>().unwrap(),
            PropertyName::VisitUtmCampaign
        );
        assert_eq!(
            "event:props:author".parse::<PropertyName>().unwrap(),
            PropertyName::custom("author")
        );
        assert!("visit:shoe_size".parse::<PropertyName>().is_err());
        assert!("event:props:".parse::<PropertyName>().is_err());
    }

    #[test]
    fn test_property_name_serde_is_wire_string() {
        let json = serde_json::to_string(&PropertyName::custom("plan")).unwrap();
        assert_eq!(json, r#""event:props:plan""#);

        let name: PropertyName = serde_json::from_str(r#""visit:os""#).unwrap();
        assert_eq!(name, PropertyName::VisitOs);
    }
}
