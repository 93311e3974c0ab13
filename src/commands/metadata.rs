//! Metadata command implementation

use std::path::Path;

use tracing::info;

use crate::{
    api::{load_or_fetch_reference_data, CacheStatus, MatchSource},
    browser::ReferenceData,
    Result,
};

use super::render::render_reference;

/// Handle the metadata command
pub async fn handle_metadata<S: MatchSource>(
    source: &S,
    cache_path: &Path,
    refresh: bool,
    as_json: bool,
) -> Result<()> {
    let (reference, status) = load_or_fetch_reference_data(source, cache_path, refresh).await?;
    info!(?status, path = %cache_path.display(), "Reference data ready");

    println!("{}", format_metadata(&reference, status, as_json)?);
    Ok(())
}

/// Text listing with a cache line at the end, or the reference data as JSON.
pub fn format_metadata(
    reference: &ReferenceData,
    status: CacheStatus,
    as_json: bool,
) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(reference)?);
    }

    let source = match status {
        CacheStatus::Hit => "from cache",
        CacheStatus::Miss => "fetched, cache written",
        CacheStatus::Refreshed => "refreshed from API",
    };
    Ok(format!("{}\n({})", render_reference(reference), source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::types::{Season, Team, Tournament},
        SeasonId, TeamId, TournamentId, Year,
    };

    fn reference() -> ReferenceData {
        ReferenceData::from_parts(
            vec![Season {
                id: SeasonId::new(1),
                start_year: Year::new(2003),
                end_year: None,
            }],
            vec![Tournament {
                id: TournamentId::new(2),
                name: "Eredivisie".to_string(),
            }],
            vec![Team {
                id: TeamId::new(3),
                name: "AFC Ajax".to_string(),
            }],
        )
    }

    #[test]
    fn test_format_metadata_text() {
        let out = format_metadata(&reference(), CacheStatus::Hit, false).unwrap();
        assert!(out.contains("Eredivisie"));
        assert!(out.ends_with("(from cache)"));
    }

    #[test]
    fn test_format_metadata_json() {
        let out = format_metadata(&reference(), CacheStatus::Miss, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["teams"][0]["name"], "AFC Ajax");
        assert_eq!(json["years"], serde_json::json!([2003]));
        assert!(json.get("ready").is_none());
    }
}
