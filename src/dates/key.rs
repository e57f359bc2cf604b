use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::errors::CalendarError;

static DATE_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date key pattern compiles"));

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` calendar day, independent of time-of-day
///
/// Ordering is chronological, which for this format is also the string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        if (0..=9999).contains(&date.year()) {
            Some(Self(date))
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    /// Parse a strict `YYYY-MM-DD` string naming a real calendar day
    pub fn parse_canonical(raw: &str) -> Option<Self> {
        if !Self::looks_canonical(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, KEY_FORMAT)
            .ok()
            .and_then(Self::from_naive)
    }

    pub fn looks_canonical(raw: &str) -> bool {
        DATE_KEY_PATTERN.is_match(raw)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn to_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.month() == month && self.year() == year
    }
}

impl Default for DateKey {
    /// 1970-01-01
    fn default() -> Self {
        Self(NaiveDate::default())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s.trim()).ok_or_else(|| CalendarError::InvalidDateKey {
            raw: s.to_string(),
        })
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
