//! Core utilities for the match browser
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching utilities
//! - `http`: API base URL resolution and HTTP client setup

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{reference_cache_path, try_read_to_string, write_string};
pub use http::{build_client, resolve_api_url, DEFAULT_API_URL};
