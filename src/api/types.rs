use crate::cli::types::{MatchId, SeasonId, TeamId, TournamentId, Year};
use serde::{Deserialize, Serialize};

/// A season as listed by `/seasons`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Season {
    pub id: SeasonId,
    pub start_year: Year,
    #[serde(default)]
    pub end_year: Option<Year>,
}

impl Season {
    /// `2019-2020` for split seasons, `2021` otherwise.
    pub fn label(&self) -> String {
        match self.end_year {
            Some(end) => format!("{}-{}", self.start_year, end),
            None => self.start_year.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Goals for (team1, team2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreGoals(pub u8, pub u8);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Score {
    #[serde(default)]
    pub half_time: Option<ScoreGoals>,
    #[serde(default)]
    pub full_time: Option<ScoreGoals>,
}

/// A single fixture from a match list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub season_id: SeasonId,
    pub tournament_id: TournamentId,
    /// Resolved locally from the cached tournament list; never read off the wire.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub team1: String,
    pub team2: String,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub stage: Option<String>,
}

/// Body of every match list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchListResponse {
    pub list: Vec<Match>,
    pub total: usize,
}
