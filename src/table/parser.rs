use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::models::TableRecord;

/// Expected league size; any other count is a warning, not an error.
pub const EXPECTED_TEAMS: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid table JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record for '{team}': {reason}")]
    Validation { team: String, reason: String },
}

/// Raw row in the Série A API shape.
///
/// The win count appears under different keys depending on the feed
/// (`vitorias`, `v`, `wins`); aliases fold them into one field here so the
/// rest of the tool only ever sees the canonical record.
#[derive(Debug, Deserialize)]
struct RawStanding {
    nome_popular: String,
    pontos: i64,
    jogos: i64,
    #[serde(default)]
    gols_pro: Option<i64>,
    #[serde(default)]
    gols_contra: Option<i64>,
    #[serde(default)]
    saldo_gols: Option<i64>,
    #[serde(default, alias = "v", alias = "wins")]
    vitorias: Option<i64>,
}

impl RawStanding {
    fn into_record(self) -> Result<TableRecord, TableError> {
        let team = self.nome_popular.trim().to_string();
        if team.is_empty() {
            return Err(TableError::Validation {
                team: "<sem nome>".into(),
                reason: "empty team name".into(),
            });
        }
        let points = non_negative(&team, "pontos", self.pontos)?;
        let played = non_negative(&team, "jogos", self.jogos)?;
        let goals_for = non_negative(&team, "gols_pro", self.gols_pro.unwrap_or(0))?;
        let goals_against = non_negative(&team, "gols_contra", self.gols_contra.unwrap_or(0))?;
        let wins = non_negative(&team, "vitorias", self.vitorias.unwrap_or(0))?;
        let goal_diff = self
            .saldo_gols
            .unwrap_or(goals_for as i64 - goals_against as i64) as i32;

        Ok(TableRecord {
            team,
            points,
            played,
            goals_for,
            goals_against,
            goal_diff,
            wins,
        })
    }
}

fn non_negative(team: &str, field: &str, value: i64) -> Result<u32, TableError> {
    u32::try_from(value).map_err(|_| TableError::Validation {
        team: team.to_string(),
        reason: format!("{field} must be a non-negative integer, got {value}"),
    })
}

/// Load and validate the table from `path`, or stdin when `None`.
pub fn load_table(path: Option<&Path>) -> Result<Vec<TableRecord>, TableError> {
    let records = match path {
        Some(p) => {
            let label = p.display().to_string();
            let file = File::open(p).map_err(|source| TableError::Io {
                path: label.clone(),
                source,
            })?;
            parse_records(BufReader::new(file), &label)?
        }
        None => parse_records(io::stdin().lock(), "<stdin>")?,
    };

    if records.len() != EXPECTED_TEAMS {
        warn!(
            "Table has {} teams (expected {})",
            records.len(),
            EXPECTED_TEAMS
        );
    }
    Ok(records)
}

fn parse_records(reader: impl Read, path: &str) -> Result<Vec<TableRecord>, TableError> {
    let raw: Vec<RawStanding> =
        serde_json::from_reader(reader).map_err(|source| TableError::Json {
            path: path.to_string(),
            source,
        })?;
    raw.into_iter().map(RawStanding::into_record).collect()
}
