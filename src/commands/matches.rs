//! Matches command implementation

use tracing::debug;

use crate::{
    api::MatchSource,
    browser::{FetchOutcome, FilterState, MatchBrowser, PaginationState},
    MatchBrowserError, PerPage, Result,
};

use super::render::{render_page, MatchPageOutput};

/// Parameters for the matches command
#[derive(Debug, Clone)]
pub struct MatchesParams {
    pub filters: FilterState,
    pub per_page: PerPage,
    /// 1-based; 0 is treated as 1
    pub page: usize,
    pub as_json: bool,
}

/// Handle the matches command
pub async fn handle_matches<S: MatchSource>(source: S, params: MatchesParams) -> Result<()> {
    let browser = load_page(source, &params).await?;

    if params.as_json {
        let output = MatchPageOutput::new(browser.list(), browser.pagination(), browser.total());
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}",
            render_page(browser.list(), browser.pagination(), browser.total())
        );
    }

    Ok(())
}

/// Load reference data and the first page, then jump forward to the
/// requested page. A page past the end lands on the last one.
pub async fn load_page<S: MatchSource>(
    source: S,
    params: &MatchesParams,
) -> Result<MatchBrowser<S>> {
    let mut browser = MatchBrowser::with_state(
        source,
        params.filters.clone(),
        PaginationState::new(params.per_page),
    );

    let outcome = browser.fetch_metadata().await;
    if !browser.reference().is_ready() {
        return Err(MatchBrowserError::FetchFailed {
            what: "reference data".to_string(),
        });
    }
    ensure_applied(outcome)?;

    if params.page > 1 {
        debug!(page = params.page, "Jumping to requested page");
        ensure_applied(browser.on_paginate_jump(true, params.page - 1).await)?;
    }

    Ok(browser)
}

fn ensure_applied(outcome: FetchOutcome) -> Result<()> {
    match outcome {
        FetchOutcome::Applied => Ok(()),
        FetchOutcome::Failed | FetchOutcome::Stale => Err(MatchBrowserError::FetchFailed {
            what: "match list".to_string(),
        }),
    }
}
