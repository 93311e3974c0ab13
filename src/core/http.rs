//! HTTP client configuration for the match archive API

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Url,
};

use crate::{error::MatchBrowserError, Result, API_URL_ENV_VAR};

/// Where the archive server mounts its REST routes by default.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

const USER_AGENT: &str = concat!("match-browser/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Pick the API base URL: explicit value, then `MATCH_BROWSER_API_URL`,
/// then [`DEFAULT_API_URL`].
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    resolve_api_url_from(api_url, std::env::var(API_URL_ENV_VAR).ok())
}

/// Same as [`resolve_api_url`] with the environment value passed in.
pub fn resolve_api_url_from(api_url: Option<String>, env_value: Option<String>) -> Result<String> {
    let non_empty = |v: &String| !v.trim().is_empty();
    let raw = api_url
        .filter(non_empty)
        .or(env_value.filter(non_empty))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let trimmed = raw.trim().trim_end_matches('/').to_string();

    let parsed = Url::parse(&trimmed).map_err(|e| MatchBrowserError::InvalidApiUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(MatchBrowserError::InvalidApiUrl {
            url: raw,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed)
}

/// Headers sent with every request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .default_headers(common_headers())
        .build()?)
}
