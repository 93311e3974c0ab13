//! Selectable option lists derived from reference data and current filters.
//!
//! Computed on demand; nothing here is stored.

use serde::Serialize;

use super::{filters::FilterState, reference::ReferenceData};
use crate::cli::types::{SeasonId, TeamId, TournamentId, Year};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption<T> {
    pub label: String,
    pub value: T,
}

pub fn season_options(reference: &ReferenceData) -> Vec<FilterOption<SeasonId>> {
    reference
        .seasons()
        .iter()
        .map(|s| FilterOption {
            label: s.label(),
            value: s.id,
        })
        .collect()
}

pub fn tournament_options(reference: &ReferenceData) -> Vec<FilterOption<TournamentId>> {
    reference
        .tournaments()
        .iter()
        .map(|t| FilterOption {
            label: t.name.clone(),
            value: t.id,
        })
        .collect()
}

pub fn team_options(reference: &ReferenceData) -> Vec<FilterOption<TeamId>> {
    reference
        .teams()
        .iter()
        .map(|t| FilterOption {
            label: t.name.clone(),
            value: t.id,
        })
        .collect()
}

/// Years that can start a range: all years before the selected end year.
pub fn from_year_options(
    reference: &ReferenceData,
    filters: &FilterState,
) -> Vec<FilterOption<Year>> {
    reference
        .years()
        .iter()
        .filter(|year| filters.to_year().map_or(true, |to| **year < to))
        .map(|year| year_option(*year))
        .collect()
}

/// Years that can end a range: all years after the selected start year, or
/// every year but the first when no start is selected.
pub fn to_year_options(reference: &ReferenceData, filters: &FilterState) -> Vec<FilterOption<Year>> {
    let first = reference.years().first().copied();
    reference
        .years()
        .iter()
        .filter(|year| match filters.from_year() {
            Some(from) => **year > from,
            None => Some(**year) != first,
        })
        .map(|year| year_option(*year))
        .collect()
}

fn year_option(year: Year) -> FilterOption<Year> {
    FilterOption {
        label: year.to_string(),
        value: year,
    }
}
