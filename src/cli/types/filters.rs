//! Filter option types shared by the CLI and the query builder.

use crate::error::{MatchBrowserError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of a fixture a team filter matches.
///
/// Only sent to the server when a team filter is active; without a team
/// scope home/away has no meaning.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    /// Matches where the team played either side
    #[default]
    Both,
    /// Matches where the team was listed first
    Home,
    /// Matches where the team was listed second
    Away,
}

impl HomeAway {
    /// Value used in the `home_away` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeAway::Both => "both",
            HomeAway::Home => "home",
            HomeAway::Away => "away",
        }
    }
}

impl fmt::Display for HomeAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HomeAway {
    type Err = MatchBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(HomeAway::Both),
            "home" => Ok(HomeAway::Home),
            "away" => Ok(HomeAway::Away),
            _ => Err(MatchBrowserError::InvalidHomeAway {
                value: s.to_string(),
            }),
        }
    }
}

/// Page sizes accepted by the match list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PerPage {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
    TwoHundredFifty,
}

impl PerPage {
    pub const ALL: [PerPage; 5] = [
        PerPage::Ten,
        PerPage::TwentyFive,
        PerPage::Fifty,
        PerPage::Hundred,
        PerPage::TwoHundredFifty,
    ];

    pub fn as_usize(&self) -> usize {
        match self {
            PerPage::Ten => 10,
            PerPage::TwentyFive => 25,
            PerPage::Fifty => 50,
            PerPage::Hundred => 100,
            PerPage::TwoHundredFifty => 250,
        }
    }
}

impl TryFrom<usize> for PerPage {
    type Error = MatchBrowserError;

    fn try_from(value: usize) -> Result<Self> {
        PerPage::ALL
            .into_iter()
            .find(|p| p.as_usize() == value)
            .ok_or_else(|| MatchBrowserError::InvalidPerPage {
                value: value.to_string(),
            })
    }
}

impl From<PerPage> for usize {
    fn from(value: PerPage) -> Self {
        value.as_usize()
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

impl FromStr for PerPage {
    type Err = MatchBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| MatchBrowserError::InvalidPerPage {
                value: s.to_string(),
            })?;
        PerPage::try_from(value)
    }
}
