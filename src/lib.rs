pub mod api;
pub mod cache;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod dates;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod http;
pub mod render;
pub mod services;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use crate::calendar::{CalendarState, SelectionChange};
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::dates::{format_calendar_header, DateKey, SystemClock};
use crate::domain::SportGroup;
use crate::filters::{
    apply_filters, calendar_months, empty_state_message, filter_by_month, flatten_sorted,
    search_sports, DateMatch, FilterState, TournamentListItem,
};
use crate::services::{CachedFetcher, CalendarScreen, FetchResult, ScreenView};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Defaults, then environment overrides, then command-line flags
pub fn build_config(production: bool, cache_dir: Option<&Path>) -> AppConfig {
    let mut config = AppConfig::with_demo_api(!production).with_env_overrides();
    if let Some(dir) = cache_dir {
        config.cache.dir = dir.to_path_buf();
    }
    config
}

pub fn handle_sports(config: &AppConfig, search: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let fetcher = CachedFetcher::from_config(config)?;
        let result = fetcher.fetch_sports().await;
        print_fetch_notice(&result);

        let sports = search_sports(&result.data, search.unwrap_or_default());
        println!("{}", render::render_sports(&sports));
        Ok(())
    })
}

pub fn handle_tournaments(
    config: &AppConfig,
    sport: Option<&str>,
    date: Option<&str>,
    exact: bool,
    month: Option<(u32, i32)>,
) -> Result<()> {
    let mut filters = FilterState::new();
    filters.sport_id = sport.map(str::to_string);
    filters.selected_date = date.map(str::parse::<DateKey>).transpose()?;
    if exact {
        filters.date_match = DateMatch::Exact;
    }
    if let Some((month, year)) = month {
        calendar::grid::first_of_month(month, year)?;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let fetcher = CachedFetcher::from_config(config)?;
        let result = fetcher.fetch_tournaments().await;
        print_fetch_notice(&result);

        let items = select_tournaments(&result.data, &filters, month);
        if items.is_empty() {
            let sports = fetcher.fetch_sports().await.data;
            let sport_name = filters.sport_id.as_deref().and_then(|id| {
                sports.iter().find(|s| s.id.matches_key(id)).map(|s| s.name.as_str())
            });
            let empty = empty_state_message(&filters, sport_name);
            println!("{}", render::render_empty_state(&empty));
        } else {
            println!("{}", render::render_tournaments(&items));
        }
        Ok(())
    })
}

/// `month` is `(month, year)`; without it the current month is shown
pub fn handle_calendar(
    config: &AppConfig,
    month: Option<(u32, i32)>,
    sport: Option<&str>,
    select: Option<&str>,
) -> Result<()> {
    let clock = SystemClock;
    let calendar = match month {
        Some((month, year)) => CalendarState::new(month, year)?,
        None => CalendarState::current(&clock)?,
    }
    .with_settings(&config.calendar)?;
    let selection = select.map(str::parse::<DateKey>).transpose()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let fetcher = CachedFetcher::from_config(config)?;
        let mut screen = CalendarScreen::new(calendar);
        screen.load(&fetcher).await;
        screen.select_sport(sport);

        if let Some(key) = selection {
            let cell = screen.grid(&clock)?.into_iter().find(|cell| cell.date_key == key);
            let change = cell.map(|cell| screen.press(&cell));
            if !matches!(change, Some(SelectionChange::Selected(_))) {
                bail!("{} is not a day of {}", key, screen.calendar().header());
            }
        }

        print_screen(&screen, &clock)
    })
}

pub fn handle_clear_cache(config: &AppConfig) -> Result<()> {
    let fetcher = CachedFetcher::from_config(config)?;
    fetcher.clear_cache();
    println!("Cache cleared: {}", config.cache.dir.display());
    Ok(())
}

// --- Helper Methods ---

fn select_tournaments(
    groups: &[SportGroup],
    filters: &FilterState,
    month: Option<(u32, i32)>,
) -> Vec<TournamentListItem> {
    let filtered = apply_filters(groups, filters);
    match month {
        Some((month, year)) => flatten_sorted(&filter_by_month(&filtered, month, year)),
        None => flatten_sorted(&filtered),
    }
}

fn print_screen(screen: &CalendarScreen, clock: &SystemClock) -> Result<()> {
    let state = screen.calendar();
    let cells = screen.grid(clock)?;
    println!("{}\n", render::render_calendar(state.month(), state.year(), &cells));

    match screen.view() {
        ScreenView::Error { message, hint } => {
            println!("{}\n{}", message.red(), hint.dimmed());
        }
        ScreenView::Empty(empty) => println!("{}", render::render_empty_state(&empty)),
        ScreenView::Results(items) => println!("{}", render::render_tournaments(&items)),
    }

    let months: Vec<String> = calendar_months(screen.groups())
        .into_iter()
        .map(|(year, month)| format_calendar_header(month, year))
        .collect();
    if !months.is_empty() {
        println!("\n{} {}", "Months with tournaments:".dimmed(), months.join(", "));
    }
    Ok(())
}

fn print_fetch_notice<T>(result: &FetchResult<T>) {
    let Some(error) = &result.error else {
        return;
    };

    if !result.success {
        eprintln!("{}", format!("Could not load data: {}", error).red());
    } else if result.from_cache {
        eprintln!("{}", format!("Showing cached data ({})", error).yellow());
    }
}
