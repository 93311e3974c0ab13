//! Query composition, pagination and fetch sequencing for browsing matches.
//!
//! - `reference`: seasons, tournaments, teams and derived years
//! - `filters`: filter selection state
//! - `query`: request path and parameters for the current state
//! - `pagination`: offset arithmetic
//! - `enrich`: resolve tournament names on fetched matches
//! - `options`: option lists for filter pickers
//! - `orchestrator`: [`MatchBrowser`], which ties the pieces together

pub mod enrich;
pub mod filters;
pub mod options;
pub mod orchestrator;
pub mod pagination;
pub mod query;
pub mod reference;

pub use filters::FilterState;
pub use orchestrator::{FetchOutcome, MatchBrowser, PendingFetch, QueryResult};
pub use pagination::PaginationState;
pub use query::MatchQuery;
pub use reference::ReferenceData;
