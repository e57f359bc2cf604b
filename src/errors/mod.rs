use anyhow::Context as _;
use std::fmt;

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

/// Invalid calendar input rejected before any grid or filter work happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth { month: u32 },
    InvalidYear { year: i32 },
    InvalidDateKey { raw: String },
    InvalidWindow { min: String, max: String },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidMonth { month } => {
                write!(f, "Invalid month {month}: expected 1-12")
            }
            CalendarError::InvalidYear { year } => {
                write!(f, "Invalid year {year}: expected 1-9998")
            }
            CalendarError::InvalidDateKey { raw } => {
                write!(f, "Invalid date key '{raw}': expected YYYY-MM-DD")
            }
            CalendarError::InvalidWindow { min, max } => {
                write!(f, "Invalid navigation window: {min} is after {max}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}
