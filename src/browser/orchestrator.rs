//! Fetch sequencing for a browsing session.
//!
//! [`MatchBrowser`] owns all session state (reference data, filters,
//! pagination, the current page) and is the only place fetch errors are
//! handled: they are logged and absorbed, leaving the previous page intact.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::{
    enrich::add_tournament_names, filters::FilterState, pagination::PaginationState,
    query::MatchQuery, reference::ReferenceData,
};
use crate::{
    api::{
        source::MatchSource,
        types::{Match, MatchListResponse},
    },
    cli::types::{HomeAway, PerPage, SeasonId, TeamId, TournamentId, Year},
    Result,
};


/// What happened to a fetch once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the current page
    Applied,
    /// The fetch failed; the previous page is unchanged
    Failed,
    /// A newer request was issued before this one completed; response dropped
    Stale,
}

/// The current page of matches and the size of the whole filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub list: Vec<Match>,
    pub total: usize,
}

/// A match list request that has been issued but not yet applied.
#[derive(Debug)]
pub struct PendingFetch {
    seq: u64,
    query: MatchQuery,
}

impl PendingFetch {
    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &MatchQuery {
        &self.query
    }
}

pub struct MatchBrowser<S> {
    source: S,
    reference: ReferenceData,
    filters: FilterState,
    pagination: PaginationState,
    result: QueryResult,
    is_loading: bool,
    latest_seq: u64,
}

impl<S: MatchSource> MatchBrowser<S> {
    pub fn new(source: S) -> Self {
        Self::with_state(source, FilterState::default(), PaginationState::default())
    }

    /// Start a session with filters and page size already chosen.
    pub fn with_state(source: S, filters: FilterState, pagination: PaginationState) -> Self {
        Self {
            source,
            reference: ReferenceData::default(),
            filters,
            pagination,
            result: QueryResult::default(),
            is_loading: false,
            latest_seq: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    pub fn list(&self) -> &[Match] {
        &self.result.list
    }

    pub fn total(&self) -> usize {
        self.result.total
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Load reference data, then the first page.
    ///
    /// If any reference list fails to load nothing else happens: the cache
    /// stays as it was and no page is requested.
    pub async fn fetch_metadata(&mut self) -> FetchOutcome {
        info!("Loading seasons, tournaments and teams");
        match ReferenceData::load(&self.source).await {
            Ok(reference) => {
                debug!(
                    seasons = reference.seasons().len(),
                    tournaments = reference.tournaments().len(),
                    teams = reference.teams().len(),
                    years = reference.years().len(),
                    "Reference data loaded"
                );
                self.reference = reference;
                self.fetch_matchlist().await
            }
            Err(err) => {
                error!(error = %err, "Failed to load reference data");
                FetchOutcome::Failed
            }
        }
    }

    /// Fetch the page described by the current filters and pagination.
    pub async fn fetch_matchlist(&mut self) -> FetchOutcome {
        let pending = self.begin_fetch();
        let response = self.source.match_list(pending.query()).await;
        self.complete_fetch(pending, response)
    }

    /// Issue a new request: bump the sequence number, raise the loading flag
    /// and snapshot the query.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        self.latest_seq += 1;
        self.is_loading = true;
        let query = MatchQuery::build(&self.filters, &self.pagination);
        debug!(seq = self.latest_seq, url = %query.relative_url(), "Fetching match list");
        PendingFetch {
            seq: self.latest_seq,
            query,
        }
    }

    /// Apply a response, unless a newer request has been issued since.
    pub fn complete_fetch(
        &mut self,
        pending: PendingFetch,
        response: Result<MatchListResponse>,
    ) -> FetchOutcome {
        if pending.seq != self.latest_seq {
            warn!(
                seq = pending.seq,
                latest = self.latest_seq,
                url = %pending.query.relative_url(),
                "Discarding stale match list response"
            );
            return FetchOutcome::Stale;
        }

        self.is_loading = false;
        match response {
            Ok(response) => {
                let list = add_tournament_names(response.list, &self.reference);
                self.result = QueryResult {
                    list,
                    total: response.total,
                };
                self.pagination.update_total_pages(self.result.total);
                debug!(
                    total = self.result.total,
                    page = self.pagination.current_page(),
                    total_pages = self.pagination.total_pages(),
                    "Match list updated"
                );
                FetchOutcome::Applied
            }
            Err(err) => {
                error!(
                    error = %err,
                    url = %pending.query.relative_url(),
                    "Failed to fetch match list"
                );
                FetchOutcome::Failed
            }
        }
    }

    pub async fn reset_paginator_and_fetch(&mut self) -> FetchOutcome {
        self.pagination.reset();
        self.fetch_matchlist().await
    }

    pub fn reset_list(&mut self) {
        self.result = QueryResult::default();
    }

    pub async fn on_select_season(&mut self, id: SeasonId) -> FetchOutcome {
        self.filters.select_season(id);
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_deselect_season(&mut self) -> FetchOutcome {
        self.filters.deselect_season();
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_select_from_year(&mut self, year: Year) -> FetchOutcome {
        self.filters.select_from_year(year);
        self.reset_paginator_and_fetch().await
    }

    /// Drops the end of the year range only.
    pub async fn on_deselect_from_year(&mut self) -> FetchOutcome {
        self.filters.deselect_from_year();
        self.reset_paginator_and_fetch().await
    }

    /// Drops the whole year range.
    pub async fn on_clear_from_year(&mut self) -> FetchOutcome {
        self.filters.clear_from_year();
        self.filters.deselect_from_year();
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_select_to_year(&mut self, year: Year) -> FetchOutcome {
        self.filters.select_to_year(year);
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_deselect_to_year(&mut self) -> FetchOutcome {
        self.filters.deselect_to_year();
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_select_team(&mut self, id: TeamId) -> FetchOutcome {
        self.filters.select_team(id);
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_deselect_team(&mut self) -> FetchOutcome {
        self.filters.deselect_team();
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_select_tournament(&mut self, id: TournamentId) -> FetchOutcome {
        self.filters.select_tournament(id);
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_deselect_tournament(&mut self) -> FetchOutcome {
        self.filters.deselect_tournament();
        self.reset_paginator_and_fetch().await
    }

    pub async fn on_select_home_away(&mut self, home_away: HomeAway) -> FetchOutcome {
        self.filters.select_home_away(home_away);
        self.reset_paginator_and_fetch().await
    }

    /// Change page size in place; the offset is kept.
    pub async fn on_select_per_page(&mut self, per_page: PerPage) -> FetchOutcome {
        self.pagination.set_per_page(per_page, self.result.total);
        self.fetch_matchlist().await
    }

    pub async fn on_paginate_one(&mut self, forward: bool) -> FetchOutcome {
        self.on_paginate_jump(forward, 1).await
    }

    pub async fn on_paginate_jump(&mut self, forward: bool, multiplier: usize) -> FetchOutcome {
        self.pagination
            .navigate(forward, multiplier, self.result.total);
        self.fetch_matchlist().await
    }
}
