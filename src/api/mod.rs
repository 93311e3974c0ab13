//! Access to the match archive REST API.

pub mod http;
pub mod reference_cache;
pub mod source;
pub mod types;

pub use http::HttpMatchSource;
pub use reference_cache::{load_or_fetch_reference_data, CacheStatus};
pub use source::MatchSource;
