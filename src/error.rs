//! Error types for the match browser

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MatchBrowserError>;

#[derive(Error, Debug)]
pub enum MatchBrowserError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Invalid page size {value}: expected one of 10, 25, 50, 100, 250")]
    InvalidPerPage { value: String },

    #[error("Invalid home/away option '{value}': expected both, home or away")]
    InvalidHomeAway { value: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Unknown command '{input}' (type `help` for a list)")]
    InvalidCommand { input: String },

    #[error("Could not load {what} (run with -v for details)")]
    FetchFailed { what: String },
}

impl MatchBrowserError {
    /// Network failures, bad status codes and undecodable bodies.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, MatchBrowserError::Http(_) | MatchBrowserError::Json(_))
    }
}
