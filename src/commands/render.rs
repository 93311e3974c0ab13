//! Text and JSON output for command results.

use serde::Serialize;

use crate::{
    api::types::{Match, Score},
    browser::{options::FilterOption, PaginationState, ReferenceData},
    PerPage,
};

/// One page of matches plus where it sits in the whole result set.
#[derive(Debug, Serialize)]
pub struct MatchPageOutput<'a> {
    pub page: usize,
    pub total_pages: usize,
    pub per_page: PerPage,
    pub offset: usize,
    pub total: usize,
    pub list: &'a [Match],
}

impl<'a> MatchPageOutput<'a> {
    pub fn new(list: &'a [Match], pagination: &PaginationState, total: usize) -> Self {
        Self {
            page: pagination.current_page(),
            total_pages: pagination.total_pages(),
            per_page: pagination.per_page(),
            offset: pagination.offset(),
            total,
            list,
        }
    }
}

/// `2-1 (1-0)`, `2-1`, or `-:-` before kick-off.
pub fn format_score(score: &Score) -> String {
    match (score.full_time, score.half_time) {
        (Some(ft), Some(ht)) => format!("{}-{} ({}-{})", ft.0, ft.1, ht.0, ht.1),
        (Some(ft), None) => format!("{}-{}", ft.0, ft.1),
        (None, _) => "-:-".to_string(),
    }
}

pub fn format_match_line(m: &Match) -> String {
    let when = match &m.time {
        Some(time) => format!("{} {}", m.date, time),
        None => m.date.clone(),
    };

    let mut context = m.tournament_name.clone().unwrap_or_default();
    for extra in [&m.stage, &m.round].into_iter().flatten() {
        if !context.is_empty() {
            context.push_str(", ");
        }
        context.push_str(extra);
    }

    format!(
        "{} {} {} {} [{}]",
        when,
        m.team1,
        format_score(&m.score),
        m.team2,
        context
    )
}

/// `Page 2 of 3 (matches 11-20 of 25)`
pub fn format_page_footer(pagination: &PaginationState, total: usize) -> String {
    match pagination.page_range(total) {
        Some((first, last)) => format!(
            "Page {} of {} (matches {}-{} of {})",
            pagination.current_page(),
            pagination.total_pages(),
            first,
            last,
            total
        ),
        None => "No matches".to_string(),
    }
}

pub fn render_page(list: &[Match], pagination: &PaginationState, total: usize) -> String {
    let mut out = String::new();
    for m in list {
        out.push_str(&format_match_line(m));
        out.push('\n');
    }
    out.push_str(&format_page_footer(pagination, total));
    out
}

pub fn render_options<T: std::fmt::Display>(options: &[FilterOption<T>]) -> String {
    if options.is_empty() {
        return "  (none)".to_string();
    }
    options
        .iter()
        .map(|o| format!("  {:>6}  {}", o.value.to_string(), o.label))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_reference(reference: &ReferenceData) -> String {
    let seasons: Vec<String> = reference
        .seasons()
        .iter()
        .map(|s| format!("  {:>6}  {}", s.id.to_string(), s.label()))
        .collect();
    let tournaments: Vec<String> = reference
        .tournaments()
        .iter()
        .map(|t| format!("  {:>6}  {}", t.id.to_string(), t.name))
        .collect();
    let teams: Vec<String> = reference
        .teams()
        .iter()
        .map(|t| format!("  {:>6}  {}", t.id.to_string(), t.name))
        .collect();
    let years: Vec<String> = reference.years().iter().map(|y| y.to_string()).collect();

    format!(
        "Seasons ({}):\n{}\nTournaments ({}):\n{}\nTeams ({}):\n{}\nYears: {}",
        seasons.len(),
        seasons.join("\n"),
        tournaments.len(),
        tournaments.join("\n"),
        teams.len(),
        teams.join("\n"),
        years.join(", ")
    )
}
