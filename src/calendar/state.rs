use log::debug;

use super::grid::{build_month, first_of_month, CalendarDayCell};
use crate::config::CalendarSettings;
use crate::dates::{format_calendar_header, Clock, DateKey};
use crate::errors::CalendarError;
use crate::filters::MarkedDates;

/// Outcome of pressing a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Adjacent-month cell, nothing happens
    Ignored,
    Selected(DateKey),
    Cleared,
}

/// Visible month plus the selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    year: i32,
    month: u32,
    selected: Option<DateKey>,
    min_month: Option<(i32, u32)>,
    max_month: Option<(i32, u32)>,
}

impl CalendarState {
    pub fn new(month: u32, year: i32) -> Result<Self, CalendarError> {
        first_of_month(month, year)?;
        Ok(Self {
            year,
            month,
            selected: None,
            min_month: None,
            max_month: None,
        })
    }

    /// Start on the month containing `today`
    pub fn current(clock: &dyn Clock) -> Result<Self, CalendarError> {
        let today = clock.today();
        Self::new(today.month(), today.year())
    }

    /// Restrict navigation to an inclusive `(year, month)` window
    ///
    /// The visible month is pulled into the window if it lies outside.
    pub fn with_settings(mut self, settings: &CalendarSettings) -> Result<Self, CalendarError> {
        for (year, month) in [settings.min_month, settings.max_month].into_iter().flatten() {
            first_of_month(month, year)?;
        }

        if let (Some(min), Some(max)) = (settings.min_month, settings.max_month) {
            if min > max {
                return Err(CalendarError::InvalidWindow {
                    min: format_calendar_header(min.1, min.0),
                    max: format_calendar_header(max.1, max.0),
                });
            }
        }

        self.min_month = settings.min_month;
        self.max_month = settings.max_month;

        let current = (self.year, self.month);
        let clamped = match (self.min_month, self.max_month) {
            (Some(min), _) if current < min => min,
            (_, Some(max)) if current > max => max,
            _ => current,
        };
        self.show(clamped);
        Ok(self)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected(&self) -> Option<&DateKey> {
        self.selected.as_ref()
    }

    /// `"Aug 2025"`
    pub fn header(&self) -> String {
        format_calendar_header(self.month, self.year)
    }

    /// Toggle selection for a pressed cell
    pub fn press(&mut self, cell: &CalendarDayCell) -> SelectionChange {
        if !cell.is_interactive() || !cell.date_key.is_in_month(self.month, self.year) {
            return SelectionChange::Ignored;
        }

        if self.selected == Some(cell.date_key) {
            self.selected = None;
            debug!("Date selection cleared");
            SelectionChange::Cleared
        } else {
            self.selected = Some(cell.date_key);
            debug!("Date selected: {}", cell.date_key);
            SelectionChange::Selected(cell.date_key)
        }
    }

    /// Press a cell and report a resulting change to `on_select`
    ///
    /// The callback receives the newly selected key, or `None` when the
    /// selection was toggled off. Ignored presses do not call it.
    pub fn press_with<F>(&mut self, cell: &CalendarDayCell, mut on_select: F) -> SelectionChange
    where
        F: FnMut(Option<DateKey>),
    {
        let change = self.press(cell);
        match change {
            SelectionChange::Selected(key) => on_select(Some(key)),
            SelectionChange::Cleared => on_select(None),
            SelectionChange::Ignored => {}
        }
        change
    }

    pub fn can_go_next(&self) -> bool {
        self.max_month.is_none_or(|max| (self.year, self.month) < max)
    }

    pub fn can_go_previous(&self) -> bool {
        self.min_month.is_none_or(|min| (self.year, self.month) > min)
    }

    /// Move forward one month; false when the window forbids it
    pub fn next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        let next = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        self.show(next)
    }

    /// Move back one month; false when the window forbids it
    pub fn previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        let previous = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        self.show(previous)
    }

    /// Grid for the visible month
    pub fn grid(&self, marked: &MarkedDates, clock: &dyn Clock) -> Result<Vec<CalendarDayCell>, CalendarError> {
        build_month(self.month, self.year, marked, self.selected.as_ref(), &clock.today())
    }

    fn show(&mut self, (year, month): (i32, u32)) -> bool {
        if first_of_month(month, year).is_err() {
            return false;
        }

        self.year = year;
        self.month = month;

        if self.selected.is_some_and(|key| !key.is_in_month(month, year)) {
            debug!("Selection outside {} cleared", self.header());
            self.selected = None;
        }
        true
    }
}
