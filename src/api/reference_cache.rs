//! On-disk snapshot of seasons, tournaments and teams.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    source::MatchSource,
    types::{Season, Team, Tournament},
};
use crate::{
    browser::ReferenceData,
    core::{try_read_to_string, write_string},
    Result,
};

/// Where reference data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Read from the snapshot file
    Hit,
    /// No usable snapshot; fetched and written
    Miss,
    /// Fetched because a refresh was requested
    Refreshed,
}

/// Serialized form of the snapshot. Years are derived again on load.
#[derive(Debug, Serialize, Deserialize)]
struct ReferenceSnapshot {
    seasons: Vec<Season>,
    tournaments: Vec<Tournament>,
    teams: Vec<Team>,
}

impl ReferenceSnapshot {
    fn from_reference(reference: &ReferenceData) -> Self {
        Self {
            seasons: reference.seasons().to_vec(),
            tournaments: reference.tournaments().to_vec(),
            teams: reference.teams().to_vec(),
        }
    }

    fn into_reference(self) -> ReferenceData {
        ReferenceData::from_parts(self.seasons, self.tournaments, self.teams)
    }
}

/// Try the snapshot at `path` first. If it is missing, unreadable or
/// `refresh == true`, fetch from `source` and rewrite the snapshot.
///
/// Failing to write the snapshot is logged, not returned.
pub async fn load_or_fetch_reference_data<S: MatchSource>(
    source: &S,
    path: &Path,
    refresh: bool,
) -> Result<(ReferenceData, CacheStatus)> {
    if !refresh {
        if let Some(s) = try_read_to_string(path) {
            match serde_json::from_str::<ReferenceSnapshot>(&s) {
                Ok(snapshot) => {
                    debug!(path = %path.display(), "Reference data read from cache");
                    return Ok((snapshot.into_reference(), CacheStatus::Hit));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Ignoring unreadable reference cache");
                }
            }
        }
    }

    let reference = ReferenceData::load(source).await?;

    let json = serde_json::to_string_pretty(&ReferenceSnapshot::from_reference(&reference))?;
    if let Err(err) = write_string(path, &json) {
        warn!(path = %path.display(), error = %err, "Could not write reference cache");
    }

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((reference, status))
}
