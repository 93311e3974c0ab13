//! Filter selection state.
//!
//! Every filter dimension is optional except home/away, which always carries
//! a value but is only sent to the server when a team is selected. Season and
//! from-year are mutually exclusive: selecting one clears the other.

use serde::Serialize;

use crate::cli::types::{HomeAway, SeasonId, TeamId, TournamentId, Year};

/// Currently selected filters.
///
/// Fields are only changed through the selection methods so the season /
/// year-range exclusion holds at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    season_id: Option<SeasonId>,
    tournament_id: Option<TournamentId>,
    team_id: Option<TeamId>,
    from_year: Option<Year>,
    to_year: Option<Year>,
    home_away: HomeAway,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn season_id(&self) -> Option<SeasonId> {
        self.season_id
    }

    pub fn tournament_id(&self) -> Option<TournamentId> {
        self.tournament_id
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn from_year(&self) -> Option<Year> {
        self.from_year
    }

    pub fn to_year(&self) -> Option<Year> {
        self.to_year
    }

    pub fn home_away(&self) -> HomeAway {
        self.home_away
    }

    /// Select a season, dropping any year range.
    pub fn select_season(&mut self, id: SeasonId) {
        self.season_id = Some(id);
        self.from_year = None;
        self.to_year = None;
    }

    pub fn deselect_season(&mut self) {
        self.season_id = None;
    }

    /// Start a year range, dropping any season.
    pub fn select_from_year(&mut self, year: Year) {
        self.from_year = Some(year);
        self.season_id = None;
    }

    /// Clears the end of the year range. The start is left in place; use
    /// [`FilterState::clear_from_year`] to drop it.
    pub fn deselect_from_year(&mut self) {
        self.to_year = None;
    }

    pub fn clear_from_year(&mut self) {
        self.from_year = None;
    }

    /// End a year range, dropping any season.
    pub fn select_to_year(&mut self, year: Year) {
        self.to_year = Some(year);
        self.season_id = None;
    }

    pub fn deselect_to_year(&mut self) {
        self.to_year = None;
    }

    pub fn select_team(&mut self, id: TeamId) {
        self.team_id = Some(id);
    }

    pub fn deselect_team(&mut self) {
        self.team_id = None;
    }

    pub fn select_tournament(&mut self, id: TournamentId) {
        self.tournament_id = Some(id);
    }

    pub fn deselect_tournament(&mut self) {
        self.tournament_id = None;
    }

    pub fn select_home_away(&mut self, home_away: HomeAway) {
        self.home_away = home_away;
    }

    /// True when the unfiltered `/all_matches` listing applies.
    ///
    /// `to_year` and `home_away` are ignored: neither narrows the result on
    /// its own.
    pub fn has_no_filters(&self) -> bool {
        self.season_id.is_none()
            && self.tournament_id.is_none()
            && self.team_id.is_none()
            && self.from_year.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_no_filters() {
        let filters = FilterState::default();
        assert!(filters.has_no_filters());
        assert_eq!(filters.home_away(), HomeAway::Both);
    }

    #[test]
    fn test_any_selection_counts_as_filter() {
        let mut f = FilterState::new();
        f.select_season(SeasonId::new(5));
        assert!(!f.has_no_filters());

        let mut f = FilterState::new();
        f.select_from_year(Year::new(1998));
        assert!(!f.has_no_filters());

        let mut f = FilterState::new();
        f.select_team(TeamId::new(1));
        assert!(!f.has_no_filters());

        let mut f = FilterState::new();
        f.select_tournament(TournamentId::new(2));
        assert!(!f.has_no_filters());
    }

    #[test]
    fn test_to_year_and_home_away_alone_are_not_filters() {
        let mut f = FilterState::new();
        f.select_to_year(Year::new(2001));
        f.select_home_away(HomeAway::Away);
        assert!(f.has_no_filters());
    }

    #[test]
    fn test_from_year_replaces_season() {
        let mut f = FilterState::new();
        f.select_season(SeasonId::new(5));
        f.select_from_year(Year::new(1998));
        assert_eq!(f.season_id(), None);
        assert_eq!(f.from_year(), Some(Year::new(1998)));
    }

    #[test]
    fn test_season_replaces_year_range() {
        let mut f = FilterState::new();
        f.select_from_year(Year::new(1998));
        f.select_to_year(Year::new(2002));
        f.select_season(SeasonId::new(5));
        assert_eq!(f.season_id(), Some(SeasonId::new(5)));
        assert_eq!(f.from_year(), None);
        assert_eq!(f.to_year(), None);
    }

    #[test]
    fn test_select_to_year_clears_season() {
        let mut f = FilterState::new();
        f.select_season(SeasonId::new(9));
        f.select_to_year(Year::new(2010));
        assert_eq!(f.season_id(), None);
        assert_eq!(f.to_year(), Some(Year::new(2010)));
    }

    #[test]
    fn test_deselect_from_year_only_clears_to_year() {
        let mut f = FilterState::new();
        f.select_from_year(Year::new(2000));
        f.select_to_year(Year::new(2005));
        f.deselect_from_year();
        assert_eq!(f.from_year(), Some(Year::new(2000)));
        assert_eq!(f.to_year(), None);

        f.clear_from_year();
        assert!(f.has_no_filters());
    }

    #[test]
    fn test_team_and_tournament_do_not_cross_clear() {
        let mut f = FilterState::new();
        f.select_season(SeasonId::new(1));
        f.select_team(TeamId::new(2));
        f.select_tournament(TournamentId::new(3));
        assert_eq!(f.season_id(), Some(SeasonId::new(1)));
        assert_eq!(f.team_id(), Some(TeamId::new(2)));
        assert_eq!(f.tournament_id(), Some(TournamentId::new(3)));

        f.deselect_team();
        f.deselect_tournament();
        assert_eq!(f.team_id(), None);
        assert_eq!(f.tournament_id(), None);
        assert_eq!(f.season_id(), Some(SeasonId::new(1)));
    }
}
