use log::{info, warn};
use serde::Serialize;

use super::fetcher::{CachedFetcher, FetchResult};
use crate::calendar::{CalendarDayCell, CalendarState, SelectionChange};
use crate::dates::Clock;
use crate::domain::{Sport, SportGroup};
use crate::errors::CalendarError;
use crate::filters::{
    apply_filters, derive_marked_dates, empty_state_message, flatten_sorted, DateMatch,
    EmptyState, FilterState, MarkedDates, TournamentListItem,
};

const RETRY_HINT: &str = "Pull down to refresh";

/// What the tournament list area should show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScreenView {
    Error { message: String, hint: String },
    Empty(EmptyState),
    Results(Vec<TournamentListItem>),
}

/// State behind the tournament calendar screen
pub struct CalendarScreen {
    groups: Vec<SportGroup>,
    sports: Vec<Sport>,
    filters: FilterState,
    calendar: CalendarState,
    error: Option<String>,
}

impl CalendarScreen {
    pub fn new(calendar: CalendarState) -> Self {
        Self {
            groups: Vec::new(),
            sports: vec![Sport::all()],
            filters: FilterState::new(),
            calendar,
            error: None,
        }
    }

    /// Fetch tournaments and sports together and take in both results
    pub async fn load(&mut self, fetcher: &CachedFetcher) {
        info!("Loading calendar screen data");
        let (tournaments, sports) = tokio::join!(fetcher.fetch_tournaments(), fetcher.fetch_sports());

        self.apply_sports(sports);
        self.apply_tournaments(tournaments);
    }

    pub fn apply_tournaments(&mut self, result: FetchResult<Vec<SportGroup>>) {
        self.error = result.error;

        if result.success {
            info!("  → {} sport groups loaded", result.data.len());
            self.groups = result.data;
        } else {
            warn!("Tournament load failed, keeping {} loaded groups", self.groups.len());
        }
    }

    /// Failed sports loads keep the current list; the sentinel is always there
    pub fn apply_sports(&mut self, result: FetchResult<Vec<Sport>>) {
        if result.success {
            self.sports = result.data;
        }
    }

    // --- Filters ---

    /// `None` or `"all"` removes the sport filter
    pub fn select_sport(&mut self, sport_id: Option<&str>) {
        self.filters.sport_id = sport_id.map(str::to_string);
    }

    pub fn set_date_match(&mut self, date_match: DateMatch) {
        self.filters.date_match = date_match;
    }

    // --- Calendar ---

    pub fn press(&mut self, cell: &CalendarDayCell) -> SelectionChange {
        let filters = &mut self.filters;
        self.calendar.press_with(cell, |key| filters.selected_date = key)
    }

    pub fn next_month(&mut self) -> bool {
        let moved = self.calendar.next_month();
        self.sync_selection();
        moved
    }

    pub fn previous_month(&mut self) -> bool {
        let moved = self.calendar.previous_month();
        self.sync_selection();
        moved
    }

    pub fn grid(&self, clock: &dyn Clock) -> Result<Vec<CalendarDayCell>, CalendarError> {
        self.calendar.grid(&self.marked_dates(), clock)
    }

    /// Marked days follow the sport filter but not the selected day
    pub fn marked_dates(&self) -> MarkedDates {
        derive_marked_dates(&self.groups, self.filters.sport_id.as_deref())
    }

    // --- Results ---

    pub fn visible_tournaments(&self) -> Vec<TournamentListItem> {
        flatten_sorted(&apply_filters(&self.groups, &self.filters))
    }

    pub fn view(&self) -> ScreenView {
        if let (Some(message), true) = (&self.error, self.groups.is_empty()) {
            return ScreenView::Error {
                message: message.clone(),
                hint: RETRY_HINT.to_string(),
            };
        }

        let items = self.visible_tournaments();
        if items.is_empty() {
            ScreenView::Empty(empty_state_message(&self.filters, self.selected_sport_name()))
        } else {
            ScreenView::Results(items)
        }
    }

    pub fn selected_sport_name(&self) -> Option<&str> {
        let sport_id = self.filters.sport_id.as_deref()?;
        self.sports
            .iter()
            .find(|sport| sport.id.matches_key(sport_id))
            .map(|sport| sport.name.as_str())
    }

    // --- Accessors ---

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn groups(&self) -> &[SportGroup] {
        &self.groups
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn sync_selection(&mut self) {
        self.filters.selected_date = self.calendar.selected().copied();
    }
}
