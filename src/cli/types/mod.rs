//! Type-safe wrappers and enums for match archive data.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::{HomeAway, PerPage};
pub use ids::{MatchId, SeasonId, TeamId, TournamentId};
pub use time::Year;
