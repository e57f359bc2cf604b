pub mod grid;
pub mod state;

pub use grid::{build_month, days_in_month, weeks, CalendarDayCell, DAYS_PER_WEEK, WEEKDAY_LABELS};
pub use state::{CalendarState, SelectionChange};
