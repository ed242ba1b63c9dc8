/// Calendar date conversion rules for trade records
///
/// Dates are written as `yyyy-MM-dd`. On input, either `yyyy-MM-dd` or an
/// RFC 3339 timestamp is accepted; timestamps keep their UTC calendar date.
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date pattern"));

/// Whether `value` has the exact `yyyy-MM-dd` shape (not necessarily a real date)
pub fn is_date_shaped(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Parse a calendar date in strict `yyyy-MM-dd` form
///
/// chrono alone also takes unpadded fields, signed years and surrounding
/// spaces; those are rejected here.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !is_date_shaped(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a trade date: `yyyy-MM-dd` first, then RFC 3339
pub fn parse_trade_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_date(value).or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// serde adapter for `Option<NaiveDate>` fields
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_trade_date(&s).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "invalid date '{}': expected yyyy-MM-dd or an RFC 3339 timestamp",
                    s
                ))
            }),
        }
    }
}
