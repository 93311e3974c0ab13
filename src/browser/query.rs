//! Request descriptors for the match list endpoints.
//!
//! Path segments are composed in a fixed order: team, tournament, then
//! either season or year range. The server only routes that order.

use std::fmt::Write as _;

use super::{filters::FilterState, pagination::PaginationState};

pub const ALL_MATCHES_PATH: &str = "/all_matches";

/// Path plus query parameters for one match list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl MatchQuery {
    /// Build the request for the given filter and pagination state.
    pub fn build(filters: &FilterState, pagination: &PaginationState) -> Self {
        Self {
            path: build_path(filters),
            params: build_params(filters, pagination),
        }
    }

    /// `?offset=0&per_page=10...` in parameter order.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .enumerate()
            .fold(String::new(), |mut acc, (i, (key, value))| {
                let sep = if i == 0 { '?' } else { '&' };
                let _ = write!(acc, "{sep}{key}={value}");
                acc
            })
    }

    /// Path and query string relative to the API base.
    pub fn relative_url(&self) -> String {
        format!("{}{}", self.path, self.query_string())
    }
}

fn build_path(filters: &FilterState) -> String {
    if filters.has_no_filters() {
        return ALL_MATCHES_PATH.to_string();
    }

    let mut path = String::new();
    if let Some(team_id) = filters.team_id() {
        let _ = write!(path, "/teams/{team_id}");
    }
    if let Some(tournament_id) = filters.tournament_id() {
        let _ = write!(path, "/tournaments/{tournament_id}");
    }
    if let Some(season_id) = filters.season_id() {
        let _ = write!(path, "/seasons/{season_id}");
    } else if let Some(from_year) = filters.from_year() {
        let _ = write!(path, "/years/{from_year}");
        if let Some(to_year) = filters.to_year() {
            let _ = write!(path, "/{to_year}");
        }
    }
    path
}

fn build_params(
    filters: &FilterState,
    pagination: &PaginationState,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("offset", pagination.offset().to_string()),
        ("per_page", pagination.per_page().to_string()),
    ];
    if filters.team_id().is_some() {
        params.push(("home_away", filters.home_away().to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{HomeAway, PerPage, SeasonId, TeamId, TournamentId, Year};

    fn query(filters: &FilterState) -> MatchQuery {
        MatchQuery::build(filters, &PaginationState::default())
    }

    #[test]
    fn test_no_filters_uses_all_matches() {
        let q = query(&FilterState::default());
        assert_eq!(q.path, "/all_matches");
        assert_eq!(q.query_string(), "?offset=0&per_page=10");
    }

    #[test]
    fn test_to_year_alone_still_lists_all_matches() {
        let mut f = FilterState::default();
        f.select_to_year(Year::new(2004));
        assert_eq!(query(&f).path, "/all_matches");
    }

    #[test]
    fn test_single_segments() {
        let mut f = FilterState::default();
        f.select_season(SeasonId::new(3));
        assert_eq!(query(&f).path, "/seasons/3");

        let mut f = FilterState::default();
        f.select_tournament(TournamentId::new(8));
        assert_eq!(query(&f).path, "/tournaments/8");

        let mut f = FilterState::default();
        f.select_from_year(Year::new(1998));
        assert_eq!(query(&f).path, "/years/1998");
    }

    #[test]
    fn test_year_range() {
        let mut f = FilterState::default();
        f.select_from_year(Year::new(1998));
        f.select_to_year(Year::new(2003));
        assert_eq!(query(&f).path, "/years/1998/2003");
    }

    #[test]
    fn test_full_composition_order() {
        let mut f = FilterState::default();
        f.select_season(SeasonId::new(4));
        f.select_tournament(TournamentId::new(2));
        f.select_team(TeamId::new(11));
        assert_eq!(query(&f).path, "/teams/11/tournaments/2/seasons/4");

        let mut f = FilterState::default();
        f.select_team(TeamId::new(11));
        f.select_from_year(Year::new(2010));
        f.select_to_year(Year::new(2012));
        assert_eq!(query(&f).path, "/teams/11/years/2010/2012");
    }

    #[test]
    fn test_home_away_only_with_team() {
        let mut f = FilterState::default();
        f.select_home_away(HomeAway::Home);
        f.select_tournament(TournamentId::new(1));
        assert_eq!(query(&f).query_string(), "?offset=0&per_page=10");

        f.select_team(TeamId::new(5));
        assert_eq!(
            query(&f).query_string(),
            "?offset=0&per_page=10&home_away=home"
        );
    }

    #[test]
    fn test_pagination_params() {
        let mut pagination = PaginationState::new(PerPage::TwentyFive);
        pagination.navigate(true, 2, 100);
        let q = MatchQuery::build(&FilterState::default(), &pagination);
        assert_eq!(q.relative_url(), "/all_matches?offset=50&per_page=25");
        assert_eq!(
            q.params,
            vec![("offset", "50".to_string()), ("per_page", "25".to_string())]
        );
    }
}
