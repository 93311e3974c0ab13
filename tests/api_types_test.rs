//! Integration tests for API wire types

use match_browser::{
    api::types::{Match, MatchListResponse, Score, ScoreGoals, Season},
    MatchId, SeasonId, TournamentId, Year,
};
use serde_json::json;

#[test]
fn test_match_list_response_deserialization() {
    let body = json!({
        "list": [
            {
                "id": 5001,
                "season_id": 12,
                "tournament_id": 3,
                "round": "Quarter-finals",
                "date": "2006-07-01",
                "time": "21:00",
                "team1": "Brazil",
                "team2": "France",
                "score": {"half_time": [0, 0], "full_time": [0, 1]},
                "stage": "Knockout"
            },
            {
                "id": 5002,
                "season_id": 12,
                "tournament_id": 3,
                "date": "2006-07-09",
                "team1": "Italy",
                "team2": "France",
                "score": {"half_time": null, "full_time": null}
            }
        ],
        "total": 64
    });

    let response: MatchListResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.total, 64);
    assert_eq!(response.list.len(), 2);

    let first = &response.list[0];
    assert_eq!(first.id, MatchId::new(5001));
    assert_eq!(first.tournament_id, TournamentId::new(3));
    assert_eq!(first.score.full_time, Some(ScoreGoals(0, 1)));
    assert_eq!(first.stage.as_deref(), Some("Knockout"));
    assert_eq!(first.tournament_name, None);

    let second = &response.list[1];
    assert_eq!(second.round, None);
    assert_eq!(second.time, None);
    assert_eq!(second.score, Score::default());
}

#[test]
fn test_enriched_match_serializes_tournament_name() {
    let mut m: Match = serde_json::from_value(json!({
        "id": 1,
        "season_id": 1,
        "tournament_id": 1,
        "date": "2000-01-01",
        "team1": "A",
        "team2": "B"
    }))
    .unwrap();

    let plain = serde_json::to_value(&m).unwrap();
    assert!(plain.get("tournament_name").is_none());

    m.tournament_name = Some("Copa del Rey".to_string());
    let enriched = serde_json::to_value(&m).unwrap();
    assert_eq!(enriched["tournament_name"], "Copa del Rey");
}

#[test]
fn test_season_labels() {
    let split: Season =
        serde_json::from_value(json!({"id": 1, "start_year": 1999, "end_year": 2000})).unwrap();
    let single: Season = serde_json::from_value(json!({"id": 2, "start_year": 2002})).unwrap();

    assert_eq!(split.id, SeasonId::new(1));
    assert_eq!(split.label(), "1999-2000");
    assert_eq!(single.end_year, None);
    assert_eq!(single.start_year, Year::new(2002));
    assert_eq!(single.label(), "2002");
}
