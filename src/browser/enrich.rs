//! Fill in display fields the match list endpoints leave out.

use super::reference::ReferenceData;
use crate::api::types::Match;

pub const UNKNOWN_TOURNAMENT_NAME: &str = "Tournament Name N/A";

/// Resolve each match's tournament name against the cached tournaments.
pub fn add_tournament_names(list: Vec<Match>, reference: &ReferenceData) -> Vec<Match> {
    list.into_iter()
        .map(|mut m| {
            let name = reference
                .tournament_name(m.tournament_id)
                .unwrap_or(UNKNOWN_TOURNAMENT_NAME);
            m.tournament_name = Some(name.to_string());
            m
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Score, ScoreGoals, Tournament};
    use crate::cli::types::{MatchId, SeasonId, TournamentId};

    fn sample_match(id: u64, tournament_id: u32) -> Match {
        Match {
            id: MatchId::new(id),
            season_id: SeasonId::new(1),
            tournament_id: TournamentId::new(tournament_id),
            tournament_name: None,
            round: Some("Matchday 3".to_string()),
            date: "2021-08-28".to_string(),
            time: None,
            team1: "Liverpool FC".to_string(),
            team2: "Chelsea FC".to_string(),
            score: Score {
                half_time: Some(ScoreGoals(0, 1)),
                full_time: Some(ScoreGoals(1, 1)),
            },
            stage: None,
        }
    }

    fn reference() -> ReferenceData {
        ReferenceData::from_parts(
            vec![],
            vec![Tournament {
                id: TournamentId::new(1),
                name: "Premier League".to_string(),
            }],
            vec![],
        )
    }

    #[test]
    fn test_known_tournament_is_resolved() {
        let enriched = add_tournament_names(vec![sample_match(1, 1)], &reference());
        assert_eq!(enriched[0].tournament_name.as_deref(), Some("Premier League"));
    }

    #[test]
    fn test_unknown_tournament_gets_fallback() {
        let enriched = add_tournament_names(vec![sample_match(1, 99)], &reference());
        assert_eq!(
            enriched[0].tournament_name.as_deref(),
            Some("Tournament Name N/A")
        );
    }

    #[test]
    fn test_other_fields_pass_through_in_order() {
        let input = vec![sample_match(2, 1), sample_match(1, 99)];
        let enriched = add_tournament_names(input.clone(), &reference());

        assert_eq!(enriched.len(), 2);
        for (before, after) in input.iter().zip(&enriched) {
            let mut after = after.clone();
            after.tournament_name = None;
            assert_eq!(before, &after);
        }
    }

    #[test]
    fn test_empty_reference_falls_back_everywhere() {
        let enriched = add_tournament_names(vec![sample_match(1, 1)], &ReferenceData::default());
        assert_eq!(
            enriched[0].tournament_name.as_deref(),
            Some(UNKNOWN_TOURNAMENT_NAME)
        );
    }
}
