use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod config;
mod projection;
mod report;
mod table;

use config::Config;
use projection::{LeagueBaseline, ProjectionSettings};

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let (input, output) = config.resolve_io();
    match &input {
        Some(path) => info!("Reading table from {}", path.display()),
        None => info!("Reading table from stdin"),
    }

    let records = table::load_table(input.as_deref())?;

    let settings = ProjectionSettings {
        season_games: config.season_games,
        shrink_strength: config.shrink_strength,
    };
    let baseline = LeagueBaseline::compute(&records);
    let standings = projection::project_table(&records, &baseline, &settings);

    // The ranking itself is product output, not a log line.
    print!("{}", report::text::render(&standings));

    report::html::write_report(&standings, &output)
        .with_context(|| format!("failed to write HTML report to {}", output.display()))?;
    info!("HTML report written: {}", output.display());

    Ok(())
}
