//! The seam between the browsing engine and wherever matches come from.

use super::types::{MatchListResponse, Season, Team, Tournament};
use crate::{browser::query::MatchQuery, Result};

/// Read-only access to the match archive.
///
/// [`super::http::HttpMatchSource`] talks to the REST API; tests provide
/// in-memory implementations.
#[allow(async_fn_in_trait)]
pub trait MatchSource {
    async fn seasons(&self) -> Result<Vec<Season>>;

    async fn tournaments(&self) -> Result<Vec<Tournament>>;

    async fn teams(&self) -> Result<Vec<Team>>;

    async fn match_list(&self, query: &MatchQuery) -> Result<MatchListResponse>;
}
