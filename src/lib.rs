//! Match Browser Library
//!
//! A client for a football match archive REST API: compose filtered queries,
//! page through the results, and resolve tournament names from cached
//! reference data.
//!
//! ## Features
//!
//! - **Filter Composition**: Season, year range, team (with home/away side) and tournament
//! - **Pagination**: Page, jump and resize with offsets that never run past the end
//! - **Reference Data**: Seasons, tournaments and teams fetched once and cached on disk
//! - **Stale Response Handling**: Only the most recently issued fetch updates the page
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use match_browser::{api::HttpMatchSource, MatchBrowser, SeasonId};
//!
//! # async fn example() -> match_browser::Result<()> {
//! let source = HttpMatchSource::new("http://127.0.0.1:3000/api")?;
//! let mut browser = MatchBrowser::new(source);
//!
//! // Reference data, then the first page of all matches
//! browser.fetch_metadata().await;
//! browser.on_select_season(SeasonId::new(3)).await;
//!
//! for m in browser.list() {
//!     println!("{} {} - {}", m.date, m.team1, m.team2);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the API base URL to avoid passing it in every command:
//! ```bash
//! export MATCH_BROWSER_API_URL=https://matches.example.org/api
//! ```

pub mod api;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use browser::MatchBrowser;
pub use cli::types::{HomeAway, MatchId, PerPage, SeasonId, TeamId, TournamentId, Year};
pub use error::{MatchBrowserError, Result};

pub const API_URL_ENV_VAR: &str = "MATCH_BROWSER_API_URL";
