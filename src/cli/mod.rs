//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{HomeAway, PerPage, SeasonId, TeamId, TournamentId, Year};

use crate::browser::FilterState;

/// Filter arguments shared between commands
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Only matches of this season (id from `metadata`).
    #[clap(long, conflicts_with_all = ["from_year", "to_year"])]
    pub season: Option<SeasonId>,

    /// Only matches from this year on.
    #[clap(long)]
    pub from_year: Option<Year>,

    /// Only matches up to this year (needs `--from-year`).
    #[clap(long, requires = "from_year")]
    pub to_year: Option<Year>,

    /// Only matches of this tournament (id from `metadata`).
    #[clap(long)]
    pub tournament: Option<TournamentId>,

    /// Only matches involving this team (id from `metadata`).
    #[clap(long)]
    pub team: Option<TeamId>,

    /// With `--team`: which side the team played on.
    #[clap(long, value_enum, default_value_t = HomeAway::Both)]
    pub home_away: HomeAway,
}

impl FilterArgs {
    /// Apply the flags through the normal selection operations.
    pub fn to_filter_state(&self) -> FilterState {
        let mut filters = FilterState::default();
        if let Some(id) = self.season {
            filters.select_season(id);
        }
        if let Some(year) = self.from_year {
            filters.select_from_year(year);
        }
        if let Some(year) = self.to_year {
            filters.select_to_year(year);
        }
        if let Some(id) = self.tournament {
            filters.select_tournament(id);
        }
        if let Some(id) = self.team {
            filters.select_team(id);
        }
        filters.select_home_away(self.home_away);
        filters
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List seasons, tournaments, teams and years (cached on disk).
    Metadata {
        /// Fetch from the API even if a cached copy exists.
        #[clap(long)]
        refresh: bool,

        /// Output as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Print one page of matches.
    Matches {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Matches per page: 10, 25, 50, 100 or 250.
        #[clap(long, default_value_t = PerPage::default())]
        per_page: PerPage,

        /// Page to show (1-based); past the end shows the last page.
        #[clap(long, default_value_t = 1)]
        page: usize,

        /// Output as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Page through matches interactively, changing filters as you go.
    Browse {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Matches per page: 10, 25, 50, 100 or 250.
        #[clap(long, default_value_t = PerPage::default())]
        per_page: PerPage,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "match-browser", about = "Browse the football match archive")]
pub struct MatchBrowserCli {
    /// API base URL (or set `MATCH_BROWSER_API_URL`).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Log debug output to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<MatchBrowserCli, clap::Error> {
        MatchBrowserCli::try_parse_from(std::iter::once("match-browser").chain(args.iter().copied()))
    }

    #[test]
    fn test_matches_defaults() {
        let cli = parse(&["matches"]).unwrap();
        match cli.command {
            Commands::Matches {
                filters,
                per_page,
                page,
                json,
            } => {
                assert_eq!(per_page, PerPage::Ten);
                assert_eq!(page, 1);
                assert!(!json);
                assert!(filters.to_filter_state().has_no_filters());
            }
            _ => panic!("Expected Matches command"),
        }
    }

    #[test]
    fn test_matches_with_filters() {
        let cli = parse(&[
            "matches",
            "--team",
            "12",
            "--home-away",
            "away",
            "--from-year",
            "2001",
            "--to-year",
            "2003",
            "--per-page",
            "50",
            "--api-url",
            "http://localhost:9000/api",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000/api"));
        let Commands::Matches {
            filters, per_page, ..
        } = cli.command
        else {
            panic!("Expected Matches command");
        };
        let state = filters.to_filter_state();
        assert_eq!(state.team_id(), Some(TeamId::new(12)));
        assert_eq!(state.home_away(), HomeAway::Away);
        assert_eq!(state.from_year(), Some(Year::new(2001)));
        assert_eq!(state.to_year(), Some(Year::new(2003)));
        assert_eq!(per_page, PerPage::Fifty);
    }

    #[test]
    fn test_season_conflicts_with_years() {
        assert!(parse(&["matches", "--season", "1", "--from-year", "2000"]).is_err());
    }

    #[test]
    fn test_to_year_requires_from_year() {
        assert!(parse(&["matches", "--to-year", "2000"]).is_err());
    }

    #[test]
    fn test_invalid_per_page_rejected() {
        assert!(parse(&["browse", "--per-page", "20"]).is_err());
    }

    #[test]
    fn test_metadata_flags() {
        let cli = parse(&["metadata", "--refresh", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Metadata {
                refresh: true,
                json: true
            }
        ));
    }
}
