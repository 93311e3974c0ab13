//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use match_browser::{
    cli::{Commands, MatchBrowserCli},
    commands::{
        browse::handle_browse,
        matches::{handle_matches, MatchesParams},
        metadata::handle_metadata,
        resolve_source,
    },
    core::reference_cache_path,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = MatchBrowserCli::parse();

    // Logs go to stderr so `--json` output stays parseable
    let default_filter = if app.verbose {
        "match_browser=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = resolve_source(app.api_url)?;

    match app.command {
        Commands::Metadata { refresh, json } => {
            let path = reference_cache_path(source.base_url());
            handle_metadata(&source, &path, refresh, json).await?
        }

        Commands::Matches {
            filters,
            per_page,
            page,
            json,
        } => {
            handle_matches(
                source,
                MatchesParams {
                    filters: filters.to_filter_state(),
                    per_page,
                    page,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Browse { filters, per_page } => {
            handle_browse(source, filters.to_filter_state(), per_page).await?
        }
    }

    Ok(())
}
