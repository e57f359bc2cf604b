use serde::Serialize;

use super::parse::parse_instant;

pub const INVALID_DATE: &str = "Invalid Date";
pub const DATE_TBD: &str = "Date TBD";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Date and time halves shown on a match card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDateTime {
    pub date: String,
    pub time: String,
}

/// `"20 Aug 2025"` in UTC
pub fn to_display_date(raw: &str) -> String {
    format_or_invalid(raw, "%d %b %Y")
}

/// `"10:00 AM"` in UTC
pub fn to_display_time(raw: &str) -> String {
    format_or_invalid(raw, "%I:%M %p")
}

pub fn to_display_date_time(raw: &str) -> DisplayDateTime {
    DisplayDateTime {
        date: to_display_date(raw),
        time: to_display_time(raw),
    }
}

/// Card subtitle for a tournament's span
///
/// A missing end date, or one that falls on the same displayed day, shows the
/// start alone. Any parse failure yields `"Date TBD"`.
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let start_display = to_display_date(start);
    if start_display == INVALID_DATE {
        return DATE_TBD.to_string();
    }

    let Some(end) = end.filter(|e| !e.trim().is_empty()) else {
        return start_display;
    };

    let end_display = to_display_date(end);
    if end_display == INVALID_DATE {
        return DATE_TBD.to_string();
    }

    if start_display == end_display {
        start_display
    } else {
        format!("{} - {}", start_display, end_display)
    }
}

/// Three-letter month abbreviation for 1..=12, `"Unknown"` otherwise
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Calendar header such as `"Aug 2025"`
pub fn format_calendar_header(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

fn format_or_invalid(raw: &str, format: &str) -> String {
    parse_instant(raw)
        .map(|instant| instant.format(format).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
