use colored::Colorize;

use crate::calendar::{weeks, CalendarDayCell, WEEKDAY_LABELS};
use crate::dates::{format_calendar_header, to_display_date_time};
use crate::domain::{sport_icon, title_case, MatchStatus, Sport, TournamentLevel};
use crate::filters::{EmptyState, TournamentListItem};

/// Month grid, one week per line, two-character day columns
pub fn render_calendar(month: u32, year: i32, cells: &[CalendarDayCell]) -> String {
    let mut lines = vec![format!("{:^27}", format_calendar_header(month, year)).bold().to_string()];

    let labels: Vec<String> = WEEKDAY_LABELS.iter().map(|l| format!("{:>2}", l.to_uppercase())).collect();
    lines.push(labels.join("  ").dimmed().to_string());

    for week in weeks(cells) {
        let row: Vec<String> = week.iter().map(render_day).collect();
        lines.push(row.join("  "));
    }

    lines.join("\n")
}

fn render_day(cell: &CalendarDayCell) -> String {
    let text = format!("{:>2}", cell.day);

    if cell.is_adjacent_month {
        return text.dimmed().to_string();
    }

    let styled = match (cell.is_selected, cell.is_marked) {
        (true, _) => text.black().on_white(),
        (false, true) => text.green().bold(),
        (false, false) => text.normal(),
    };

    if cell.is_today {
        styled.underline().to_string()
    } else {
        styled.to_string()
    }
}

pub fn render_sports(sports: &[Sport]) -> String {
    sports
        .iter()
        .map(|sport| {
            let (icon, name) = if sport.is_all() {
                (" ", sport.name.clone())
            } else {
                (sport_icon(Some(&sport.name), Some(&sport.id)), title_case(&sport.name))
            };
            format!("{} {:<12} {}", icon, sport.id.as_key(), name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One block per tournament: headline, then its matches
pub fn render_tournaments(items: &[TournamentListItem]) -> String {
    items.iter().map(render_item).collect::<Vec<_>>().join("\n\n")
}

fn render_item(item: &TournamentListItem) -> String {
    let tournament = &item.tournament;
    let icon = sport_icon(Some(&item.sport_name), Some(&item.sport_id));

    let mut headline = format!("{} {}", icon, tournament.name.bold());
    if let Some(level) = TournamentLevel::parse(tournament.level.as_deref()).label() {
        headline.push_str(&format!(" [{}]", level).cyan().to_string());
    }

    let mut lines = vec![headline, format!("   {}", tournament.date_range_label())];
    if let Some(venue) = &tournament.venue {
        lines.push(format!("   {}", venue.dimmed()));
    }

    for game in &tournament.matches {
        let when = to_display_date_time(&game.start_time);
        let status = MatchStatus::parse(&game.status);
        lines.push(format!(
            "   - {} vs {}  {} {}  {}",
            game.team_a,
            game.team_b,
            when.date,
            when.time,
            status_label(&status)
        ));
    }

    lines.join("\n")
}

fn status_label(status: &MatchStatus) -> String {
    match status {
        MatchStatus::Live => status.label().red().bold().to_string(),
        MatchStatus::Completed => status.label().dimmed().to_string(),
        _ => status.label().to_string(),
    }
}

pub fn render_empty_state(empty: &EmptyState) -> String {
    format!("{}\n{}", empty.message.yellow(), empty.hint.dimmed())
}
