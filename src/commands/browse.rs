//! Interactive browse command
//!
//! Reads one command per line and applies it to a [`MatchBrowser`], printing
//! the resulting page after every fetch.

use std::{fmt, io::Write, str::FromStr};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{
    api::MatchSource,
    browser::{
        options::{
            from_year_options, season_options, team_options, to_year_options, tournament_options,
        },
        FetchOutcome, FilterState, MatchBrowser, PaginationState, ReferenceData,
    },
    HomeAway, MatchBrowserError, PerPage, Result, SeasonId, TeamId, TournamentId, Year,
};

use super::render::{render_options, render_page};

const HELP: &str = "\
Commands:
  next | n                 next page
  prev | p                 previous page
  jump <+N|-N>             move N pages forward or back
  per-page <N>             10, 25, 50, 100 or 250
  season <id|none>         select a season (clears the year range)
  from <year|none>         start of the year range (clears the season)
  to <year|none>           end of the year range
  team <id|none>           select a team
  home-away <both|home|away>
  tournament <id|none>     select a tournament
  reset                    back to the first page
  options <seasons|tournaments|teams|from|to>
  help | ?                 this text
  quit | q                 leave";

/// Which option list to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Seasons,
    Tournaments,
    Teams,
    FromYears,
    ToYears,
}

impl FromStr for OptionKind {
    type Err = MatchBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "season" | "seasons" => Ok(OptionKind::Seasons),
            "tournament" | "tournaments" => Ok(OptionKind::Tournaments),
            "team" | "teams" => Ok(OptionKind::Teams),
            "from" => Ok(OptionKind::FromYears),
            "to" => Ok(OptionKind::ToYears),
            _ => Err(MatchBrowserError::InvalidCommand {
                input: format!("options {}", s),
            }),
        }
    }
}

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Jump { forward: bool, pages: usize },
    PerPage(PerPage),
    Season(Option<SeasonId>),
    FromYear(Option<Year>),
    ToYear(Option<Year>),
    Team(Option<TeamId>),
    Tournament(Option<TournamentId>),
    HomeAway(HomeAway),
    Reset,
    Options(OptionKind),
    Help,
    Quit,
}

/// `none` (or `-`) clears a selection; anything else must parse as `T`.
fn optional<T: FromStr<Err = MatchBrowserError>>(arg: &str) -> Result<Option<T>> {
    if arg.eq_ignore_ascii_case("none") || arg == "-" {
        Ok(None)
    } else {
        arg.parse().map(Some)
    }
}

impl FromStr for BrowseCommand {
    type Err = MatchBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MatchBrowserError::InvalidCommand {
            input: s.trim().to_string(),
        };

        let mut words = s.split_whitespace();
        let command = words.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(invalid());
        }

        let parsed = match (command.as_str(), arg) {
            ("next" | "n", None) => BrowseCommand::Next,
            ("prev" | "p", None) => BrowseCommand::Prev,
            ("jump" | "j", Some(n)) => {
                let (forward, digits) = match n.strip_prefix('-') {
                    Some(rest) => (false, rest),
                    None => (true, n.strip_prefix('+').unwrap_or(n)),
                };
                BrowseCommand::Jump {
                    forward,
                    pages: digits.parse()?,
                }
            }
            ("per-page", Some(n)) => BrowseCommand::PerPage(n.parse()?),
            ("season", Some(v)) => BrowseCommand::Season(optional(v)?),
            ("from", Some(v)) => BrowseCommand::FromYear(optional(v)?),
            ("to", Some(v)) => BrowseCommand::ToYear(optional(v)?),
            ("team", Some(v)) => BrowseCommand::Team(optional(v)?),
            ("tournament", Some(v)) => BrowseCommand::Tournament(optional(v)?),
            ("home-away", Some(v)) => BrowseCommand::HomeAway(v.parse()?),
            ("reset", None) => BrowseCommand::Reset,
            ("options", Some(kind)) => BrowseCommand::Options(kind.parse()?),
            ("help" | "?", None) => BrowseCommand::Help,
            ("quit" | "q" | "exit", None) => BrowseCommand::Quit,
            _ => return Err(invalid()),
        };
        Ok(parsed)
    }
}

/// What a command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Fetched(FetchOutcome),
    Text(String),
    Quit,
}

/// Apply one command to the session.
pub async fn execute<S: MatchSource>(browser: &mut MatchBrowser<S>, command: BrowseCommand) -> Reply {
    debug!(?command, "Browse command");
    let outcome = match command {
        BrowseCommand::Next => browser.on_paginate_one(true).await,
        BrowseCommand::Prev => browser.on_paginate_one(false).await,
        BrowseCommand::Jump { forward, pages } => browser.on_paginate_jump(forward, pages).await,
        BrowseCommand::PerPage(per_page) => browser.on_select_per_page(per_page).await,
        BrowseCommand::Season(Some(id)) => browser.on_select_season(id).await,
        BrowseCommand::Season(None) => browser.on_deselect_season().await,
        BrowseCommand::FromYear(Some(year)) => browser.on_select_from_year(year).await,
        BrowseCommand::FromYear(None) => browser.on_clear_from_year().await,
        BrowseCommand::ToYear(Some(year)) => browser.on_select_to_year(year).await,
        BrowseCommand::ToYear(None) => browser.on_deselect_to_year().await,
        BrowseCommand::Team(Some(id)) => browser.on_select_team(id).await,
        BrowseCommand::Team(None) => browser.on_deselect_team().await,
        BrowseCommand::Tournament(Some(id)) => browser.on_select_tournament(id).await,
        BrowseCommand::Tournament(None) => browser.on_deselect_tournament().await,
        BrowseCommand::HomeAway(home_away) => browser.on_select_home_away(home_away).await,
        BrowseCommand::Reset => browser.reset_paginator_and_fetch().await,
        BrowseCommand::Options(kind) => {
            return Reply::Text(list_options(browser.reference(), browser.filters(), kind))
        }
        BrowseCommand::Help => return Reply::Text(HELP.to_string()),
        BrowseCommand::Quit => return Reply::Quit,
    };
    Reply::Fetched(outcome)
}

fn list_options(reference: &ReferenceData, filters: &FilterState, kind: OptionKind) -> String {
    match kind {
        OptionKind::Seasons => render_options(&season_options(reference)),
        OptionKind::Tournaments => render_options(&tournament_options(reference)),
        OptionKind::Teams => render_options(&team_options(reference)),
        OptionKind::FromYears => render_options(&from_year_options(reference, filters)),
        OptionKind::ToYears => render_options(&to_year_options(reference, filters)),
    }
}

/// Active filters with names resolved, e.g. `season 2019-2020, team Arsenal FC (home)`.
pub fn describe_filters(filters: &FilterState, reference: &ReferenceData) -> String {
    let mut parts = Vec::new();

    if let Some(id) = filters.season_id() {
        let label = reference
            .seasons()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label())
            .unwrap_or_else(|| id.to_string());
        parts.push(format!("season {}", label));
    }
    match (filters.from_year(), filters.to_year()) {
        (Some(from), Some(to)) => parts.push(format!("years {}-{}", from, to)),
        (Some(from), None) => parts.push(format!("from {}", from)),
        (None, Some(to)) => parts.push(format!("to {} (ignored without a start year)", to)),
        (None, None) => {}
    }
    if let Some(id) = filters.team_id() {
        let name = reference
            .teams()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string());
        parts.push(format!("team {} ({})", name, filters.home_away()));
    }
    if let Some(id) = filters.tournament_id() {
        let name = reference
            .tournament_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string());
        parts.push(format!("tournament {}", name));
    }

    if parts.is_empty() {
        "Filters: none".to_string()
    } else {
        format!("Filters: {}", parts.join(", "))
    }
}

struct PageView<'a, S>(&'a MatchBrowser<S>);

impl<S: MatchSource> fmt::Display for PageView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let browser = self.0;
        writeln!(
            f,
            "{}",
            describe_filters(browser.filters(), browser.reference())
        )?;
        write!(
            f,
            "{}",
            render_page(browser.list(), browser.pagination(), browser.total())
        )
    }
}

/// Drive a session from `input` until `quit` or end of input.
pub async fn run_session<S, R, W>(
    browser: &mut MatchBrowser<S>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: MatchSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        match execute(browser, command).await {
            Reply::Quit => break,
            Reply::Text(text) => writeln!(out, "{}", text)?,
            Reply::Fetched(FetchOutcome::Failed) => {
                writeln!(out, "Request failed; showing the previous page.")?;
                writeln!(out, "{}", PageView(&*browser))?;
            }
            Reply::Fetched(_) => writeln!(out, "{}", PageView(&*browser))?,
        }
    }

    Ok(())
}

/// Handle the browse command
pub async fn handle_browse<S: MatchSource>(
    source: S,
    filters: FilterState,
    per_page: PerPage,
) -> Result<()> {
    let mut browser = MatchBrowser::with_state(source, filters, PaginationState::new(per_page));

    browser.fetch_metadata().await;
    if !browser.reference().is_ready() {
        return Err(MatchBrowserError::FetchFailed {
            what: "reference data".to_string(),
        });
    }

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", PageView(&browser))?;
    writeln!(stdout, "Type `help` for commands.")?;

    run_session(&mut browser, BufReader::new(tokio::io::stdin()), &mut stdout).await
}
