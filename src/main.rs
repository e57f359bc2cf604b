use anyhow::Result;

use tournament_calendar::cli::{Cli, Command};
use tournament_calendar::{
    build_config, handle_calendar, handle_clear_cache, handle_sports, handle_tournaments, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli.production, cli.cache_dir.as_deref());

    match &cli.command {
        Command::Sports { search } => handle_sports(&config, search.as_deref()),
        Command::Tournaments {
            sport,
            date,
            exact,
            month,
            year,
        } => handle_tournaments(
            &config,
            sport.as_deref(),
            date.as_deref(),
            *exact,
            month.zip(*year),
        ),
        Command::Calendar {
            month,
            year,
            sport,
            select,
        } => handle_calendar(&config, month.zip(*year), sport.as_deref(), select.as_deref()),
        Command::ClearCache => handle_clear_cache(&config),
    }
}
