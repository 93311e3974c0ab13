//! Reference data: seasons, tournaments and teams, plus the years they span.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    api::{
        source::MatchSource,
        types::{Season, Team, Tournament},
    },
    cli::types::{TournamentId, Year},
    Result,
};

/// Lookup tables fetched once per session.
///
/// An instance is either empty (the default) or fully loaded; a failed load
/// never produces a partially filled value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceData {
    seasons: Vec<Season>,
    tournaments: Vec<Tournament>,
    teams: Vec<Team>,
    years: Vec<Year>,
    #[serde(skip)]
    ready: bool,
}

impl ReferenceData {
    /// Fetch all three lists concurrently. Any failure fails the whole load.
    pub async fn load<S: MatchSource>(source: &S) -> Result<Self> {
        let (seasons, tournaments, teams) =
            tokio::try_join!(source.seasons(), source.tournaments(), source.teams())?;

        Ok(Self::from_parts(seasons, tournaments, teams))
    }

    pub fn from_parts(seasons: Vec<Season>, tournaments: Vec<Tournament>, teams: Vec<Team>) -> Self {
        let years = derive_years(&seasons);
        Self {
            seasons,
            tournaments,
            teams,
            years,
            ready: true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Distinct start and end years across all seasons, in first-seen order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn tournament_name(&self, id: TournamentId) -> Option<&str> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }
}

fn derive_years(seasons: &[Season]) -> Vec<Year> {
    let mut seen = HashSet::new();
    seasons
        .iter()
        .flat_map(|s| std::iter::once(s.start_year).chain(s.end_year))
        .filter(|year| seen.insert(*year))
        .collect()
}
