use clap::Parser;
use std::path::{Path, PathBuf};

use crate::projection::{SEASON_GAMES, SHRINK_K};

/// Fallback HTML output filename when no output path is given.
pub const DEFAULT_OUTPUT: &str = "projecao_brasileirao.html";

/// Brasileirão final-table projector
#[derive(Parser, Debug, Clone)]
#[command(name = "brasileirao-projector", version, about)]
pub struct Config {
    /// Input table JSON (Série A API format); reads stdin when omitted.
    ///
    /// A lone positional ending in `.html`/`.htm` is treated as the OUTPUT
    /// path instead, with the table read from stdin.
    pub input: Option<PathBuf>,

    /// Output path for the HTML report
    pub output: Option<PathBuf>,

    /// Season length in rounds per team
    #[arg(long, env = "SEASON_GAMES", default_value_t = SEASON_GAMES)]
    pub season_games: u32,

    /// Shrinkage strength: the league average counts as this many pseudo-games
    #[arg(long, env = "SHRINK_K", default_value_t = SHRINK_K)]
    pub shrink_strength: f64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.season_games == 0 {
            anyhow::bail!("season-games must be at least 1");
        }
        if !self.shrink_strength.is_finite() || self.shrink_strength < 0.0 {
            anyhow::bail!("shrink-strength must be a non-negative number");
        }
        Ok(())
    }

    /// Resolve the positional arguments into (input, output) paths.
    ///
    /// Supports both `projector tabela.json [saida.html]` and the
    /// stdin-friendly `cat tabela.json | projector saida.html`.
    pub fn resolve_io(&self) -> (Option<PathBuf>, PathBuf) {
        match (&self.input, &self.output) {
            (Some(first), None) if is_html(first) => (None, first.clone()),
            (input, output) => (
                input.clone(),
                output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            ),
        }
    }
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("html") | Some("htm")
    )
}
