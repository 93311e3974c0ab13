use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    source::MatchSource,
    types::{MatchListResponse, Season, Team, Tournament},
};
use crate::{browser::query::MatchQuery, core::build_client, Result};


/// [`MatchSource`] backed by the archive's REST API.
#[derive(Debug, Clone)]
pub struct HttpMatchSource {
    client: Client,
    base_url: String,
}

impl HttpMatchSource {
    /// Source with a freshly built client. `base_url` should already be
    /// validated (see [`crate::core::resolve_api_url`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(build_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "GET");

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}

impl MatchSource for HttpMatchSource {
    async fn seasons(&self) -> Result<Vec<Season>> {
        self.get_json("/seasons", &[]).await
    }

    async fn tournaments(&self) -> Result<Vec<Tournament>> {
        self.get_json("/tournaments", &[]).await
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.get_json("/teams", &[]).await
    }

    async fn match_list(&self, query: &MatchQuery) -> Result<MatchListResponse> {
        self.get_json(&query.path, &query.params).await
    }
}
