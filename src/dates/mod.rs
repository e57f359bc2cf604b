//! Date normalization under a single convention: every calendar-day
//! extraction and every display string uses UTC calendar fields. No code in
//! this crate shifts instants by a fixed offset.

pub mod clock;
pub mod display;
pub mod key;
pub mod parse;

pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{
    format_calendar_header, format_date_range, month_name, to_display_date,
    to_display_date_time, to_display_time, DisplayDateTime, DATE_TBD, INVALID_DATE,
};
pub use key::DateKey;
pub use parse::{parse_instant, to_date_key};

/// Today's key from the system clock
pub fn today() -> DateKey {
    SystemClock.today()
}

pub fn today_with(clock: &dyn Clock) -> DateKey {
    clock.today()
}

pub fn is_today(key: &DateKey, clock: &dyn Clock) -> bool {
    *key == clock.today()
}
