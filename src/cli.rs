use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "tournament calendar developer tool")]
pub struct Cli {
    /// Use the production API instead of the demo API
    #[arg(long, global = true)]
    pub production: bool,

    /// Cache directory (defaults to ./cache)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// List sports, optionally narrowed by a name prefix
    Sports {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List tournaments with optional sport and date filters
    Tournaments {
        /// Sport id, or "all"
        #[arg(short, long)]
        sport: Option<String>,

        /// Day as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Match tournaments starting on --date instead of running on it
        #[arg(long, requires = "date")]
        exact: bool,

        #[arg(long, requires = "year")]
        month: Option<u32>,

        #[arg(long, requires = "month")]
        year: Option<i32>,
    },
    /// Print a month grid with tournament days highlighted
    Calendar {
        /// Defaults to the current month
        #[arg(long, requires = "year")]
        month: Option<u32>,

        #[arg(long, requires = "month")]
        year: Option<i32>,

        /// Sport id, or "all"
        #[arg(short, long)]
        sport: Option<String>,

        /// Day to select, as YYYY-MM-DD
        #[arg(long)]
        select: Option<String>,
    },
    /// Remove cached sports and tournaments
    ClearCache,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_with_globals() {
        let cli = Cli::parse_from([
            "tournament-calendar",
            "calendar",
            "--month",
            "8",
            "--year",
            "2025",
            "--select",
            "2025-08-20",
            "--production",
        ]);

        assert!(cli.production);
        assert_eq!(
            cli.command,
            Command::Calendar {
                month: Some(8),
                year: Some(2025),
                sport: None,
                select: Some("2025-08-20".to_string()),
            }
        );
    }

    #[test]
    fn test_month_requires_year() {
        let result = Cli::try_parse_from(["tournament-calendar", "tournaments", "--month", "8"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_month_is_optional() {
        let cli = Cli::try_parse_from(["tournament-calendar", "calendar"]).unwrap();
        assert!(matches!(cli.command, Command::Calendar { month: None, year: None, .. }));

        let result = Cli::try_parse_from(["tournament-calendar", "calendar", "--year", "2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_clear_cache_is_kebab_case() {
        let cli = Cli::try_parse_from(["tournament-calendar", "--cache-dir", "/tmp/c", "clear-cache"]).unwrap();
        assert_eq!(cli.command, Command::ClearCache);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/c")));
    }
}
