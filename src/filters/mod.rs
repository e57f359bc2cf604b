//! Pure narrowing and derivation over in-memory sport groups. Nothing here
//! touches the cache or the network.

pub mod date;
pub mod listing;
pub mod marked;
pub mod sport;
pub mod state;

pub use date::{filter_by_date_range, filter_by_exact_date, filter_by_month};
pub use listing::{calendar_months, flatten_sorted, TournamentListItem};
pub use marked::{derive_marked_dates, MarkInfo, MarkedDates};
pub use sport::filter_by_sport;
pub use state::{apply_filters, empty_state_message, search_sports, DateMatch, EmptyState, FilterState};
