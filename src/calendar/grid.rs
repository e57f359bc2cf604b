use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dates::DateKey;
use crate::errors::CalendarError;
use crate::filters::MarkedDates;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["m", "t", "w", "t", "f", "s", "s"];

/// One square of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayCell {
    pub day: u32,
    pub date_key: DateKey,
    pub is_marked: bool,
    pub is_selected: bool,
    pub is_today: bool,
    /// Belongs to the previous or next month; dimmed and not pressable
    pub is_adjacent_month: bool,
}

impl CalendarDayCell {
    fn adjacent(date: NaiveDate) -> Option<Self> {
        Some(Self {
            day: date.day(),
            date_key: DateKey::from_naive(date)?,
            is_marked: false,
            is_selected: false,
            is_today: false,
            is_adjacent_month: true,
        })
    }

    pub fn is_interactive(&self) -> bool {
        !self.is_adjacent_month
    }
}

/// Build the Monday-first grid for a month
///
/// Leading cells come from the previous month, trailing cells from the next
/// month, only as many as needed to complete the last week. The result is
/// always a whole number of weeks.
pub fn build_month(
    month: u32,
    year: i32,
    marked: &MarkedDates,
    selected: Option<&DateKey>,
    today: &DateKey,
) -> Result<Vec<CalendarDayCell>, CalendarError> {
    let first = first_of_month(month, year)?;
    let days = days_in_month(first);
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut cells = Vec::with_capacity(42);

    cells.extend(
        (1..=leading as u64)
            .rev()
            .filter_map(|back| first.checked_sub_days(chrono::Days::new(back)))
            .filter_map(CalendarDayCell::adjacent),
    );

    for day in 1..=days {
        let Some(date_key) = DateKey::from_ymd(year, month, day) else {
            continue;
        };
        cells.push(CalendarDayCell {
            day,
            date_key,
            is_marked: marked.contains_key(&date_key),
            is_selected: selected == Some(&date_key),
            is_today: date_key == *today,
            is_adjacent_month: false,
        });
    }

    let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    let after_last = first.checked_add_days(chrono::Days::new(days as u64));
    cells.extend(
        (0..trailing as u64)
            .filter_map(|offset| after_last?.checked_add_days(chrono::Days::new(offset)))
            .filter_map(CalendarDayCell::adjacent),
    );

    Ok(cells)
}

/// Split a grid into display rows
pub fn weeks(cells: &[CalendarDayCell]) -> Vec<&[CalendarDayCell]> {
    cells.chunks(DAYS_PER_WEEK).collect()
}

pub fn first_of_month(month: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    // Adjacent-month cells must stay within four-digit years
    if !(1..=9998).contains(&year) {
        return Err(CalendarError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth { month })
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MarkInfo;
    use crate::domain::Identifier;

    fn key(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    fn mark(raw: &str) -> (DateKey, MarkInfo) {
        (
            key(raw),
            MarkInfo {
                tournament_id: Identifier::Number(1),
                tournament_name: "Cup".to_string(),
            },
        )
    }

    fn in_month(cells: &[CalendarDayCell]) -> usize {
        cells.iter().filter(|c| !c.is_adjacent_month).count()
    }

    #[test]
    fn test_september_2025_starts_monday() {
        let cells = build_month(9, 2025, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();

        assert!(!cells[0].is_adjacent_month);
        assert_eq!(cells[0].date_key.to_string(), "2025-09-01");
        assert_eq!(in_month(&cells), 30);
        assert_eq!(cells.len(), 35);

        let trailing: Vec<String> = cells[30..].iter().map(|c| c.date_key.to_string()).collect();
        assert_eq!(trailing, vec!["2025-10-01", "2025-10-02", "2025-10-03", "2025-10-04", "2025-10-05"]);
        assert!(cells[30..].iter().all(|c| c.is_adjacent_month));
    }

    #[test]
    fn test_august_2025_has_leading_july_days() {
        let cells = build_month(8, 2025, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();

        let leading: Vec<u32> = cells.iter().take_while(|c| c.is_adjacent_month).map(|c| c.day).collect();
        assert_eq!(leading, vec![28, 29, 30, 31]);
        assert_eq!(cells[0].date_key.to_string(), "2025-07-28");
        assert_eq!(cells.len(), 35);
        assert!(!cells.last().unwrap().is_adjacent_month);
    }

    #[test]
    fn test_lengths_are_whole_weeks() {
        for (month, year, expected_len) in [(2, 2021, 28), (6, 2025, 42), (3, 2025, 42), (2, 2026, 35), (2, 2024, 35)] {
            let cells = build_month(month, year, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();
            assert_eq!(cells.len(), expected_len, "{year}-{month}");
            assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
            let first = first_of_month(month, year).unwrap();
            assert_eq!(in_month(&cells) as u32, days_in_month(first));
        }
    }

    #[test]
    fn test_year_boundaries() {
        let january = build_month(1, 2026, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();
        assert_eq!(january[0].date_key.to_string(), "2025-12-29");

        let december = build_month(12, 2025, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();
        assert_eq!(december.last().unwrap().date_key.to_string(), "2026-01-04");
    }

    #[test]
    fn test_flags() {
        let marked: MarkedDates = [mark("2025-08-20"), mark("2025-07-31")].into_iter().collect();
        let selected = key("2025-08-21");
        let today = key("2025-08-22");

        let cells = build_month(8, 2025, &marked, Some(&selected), &today).unwrap();
        let find = |raw: &str| cells.iter().find(|c| c.date_key == key(raw)).unwrap();

        assert!(find("2025-08-20").is_marked);
        assert!(find("2025-08-21").is_selected);
        assert!(find("2025-08-22").is_today);
        // Adjacent cells never carry flags
        assert!(!find("2025-07-31").is_marked);
        assert_eq!(cells.iter().filter(|c| c.is_selected).count(), 1);
    }

    #[test]
    fn test_selection_outside_month_is_not_shown() {
        let selected = key("2025-07-30");
        let cells = build_month(8, 2025, &MarkedDates::new(), Some(&selected), &key("2000-01-01")).unwrap();
        assert!(cells.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_invalid_input() {
        let today = key("2000-01-01");
        assert_eq!(
            build_month(13, 2025, &MarkedDates::new(), None, &today),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            build_month(1, 0, &MarkedDates::new(), None, &today),
            Err(CalendarError::InvalidYear { year: 0 })
        );
    }

    #[test]
    fn test_weeks_split() {
        let cells = build_month(9, 2025, &MarkedDates::new(), None, &key("2000-01-01")).unwrap();
        let rows = weeks(&cells);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.len() == DAYS_PER_WEEK));
    }
}
