//! Command implementations for the match browser CLI

pub mod browse;
pub mod matches;
pub mod metadata;
pub mod render;

use crate::{api::HttpMatchSource, core::resolve_api_url, Result};


/// Resolve the API base URL (flag, then environment, then default) and
/// build an HTTP source for it.
pub fn resolve_source(api_url: Option<String>) -> Result<HttpMatchSource> {
    let base_url = resolve_api_url(api_url)?;
    HttpMatchSource::new(base_url)
}
