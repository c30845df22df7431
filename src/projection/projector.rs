//! Shrinkage projection of the final league table.
//!
//! Each team's observed per-game rates (points, goals for, goals against,
//! wins) are blended with the league average before extrapolating over the
//! remaining fixtures. The blend is Bayesian-style shrinkage: observed games
//! carry their own weight, the league average counts as `shrink_strength`
//! pseudo-games. A side two rounds into the season is pulled hard toward the
//! pack; a side with thirty rounds behind it barely moves.

use crate::projection::baseline::LeagueBaseline;
use crate::table::{ProjectedRecord, TableRecord};

/// Rounds each team plays over a full season.
pub const SEASON_GAMES: u32 = 38;

/// Shrinkage strength: the league average counts as this many pseudo-games.
pub const SHRINK_K: f64 = 6.0;

/// Projection knobs, passed explicitly so alternate horizons and shrinkage
/// strengths stay testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSettings {
    pub season_games: u32,
    pub shrink_strength: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            season_games: SEASON_GAMES,
            shrink_strength: SHRINK_K,
        }
    }
}

// ── Per-team shrinkage ───────────────────────────────────────────────────────

/// Regressed per-game rates for one team.
struct RegressedRates {
    points: f64,
    goals_for: f64,
    goals_against: f64,
    wins: f64,
}

fn regress(record: &TableRecord, baseline: &LeagueBaseline, k: f64) -> RegressedRates {
    let played = f64::from(record.played);
    if played + k > 0.0 {
        let blend = |observed: f64, league_avg: f64| (observed + k * league_avg) / (played + k);
        RegressedRates {
            points: blend(f64::from(record.points), baseline.points_per_game),
            goals_for: blend(f64::from(record.goals_for), baseline.goals_for_per_game),
            goals_against: blend(f64::from(record.goals_against), baseline.goals_against_per_game),
            wins: blend(f64::from(record.wins), baseline.wins_per_game),
        }
    } else {
        // No games played and zero shrinkage: nothing to blend, the league
        // average is the only estimate available.
        RegressedRates {
            points: baseline.points_per_game,
            goals_for: baseline.goals_for_per_game,
            goals_against: baseline.goals_against_per_game,
            wins: baseline.wins_per_game,
        }
    }
}

// ── Extrapolation ────────────────────────────────────────────────────────────

/// Project a single team to the end of the season. Pure; the input record is
/// untouched.
pub fn project_record(
    record: &TableRecord,
    baseline: &LeagueBaseline,
    settings: &ProjectionSettings,
) -> ProjectedRecord {
    let rates = regress(record, baseline, settings.shrink_strength);
    let remaining = f64::from(settings.season_games.saturating_sub(record.played));

    let final_goals_for = f64::from(record.goals_for) + rates.goals_for * remaining;
    let final_goals_against = f64::from(record.goals_against) + rates.goals_against * remaining;

    ProjectedRecord {
        final_points: f64::from(record.points) + rates.points * remaining,
        final_wins: f64::from(record.wins) + rates.wins * remaining,
        final_goals_for,
        final_goals_against,
        final_goal_diff: final_goals_for - final_goals_against,
        current: record.clone(),
    }
}

// ── Ranking ──────────────────────────────────────────────────────────────────

/// Project every team and rank the league.
///
/// The tie-break order is the official one (points, then wins, then goal
/// difference, then goals scored) applied to the projected values. The sort
/// is stable: teams equal on all four keys keep their input order.
pub fn project_table(
    records: &[TableRecord],
    baseline: &LeagueBaseline,
    settings: &ProjectionSettings,
) -> Vec<ProjectedRecord> {
    let mut standings: Vec<ProjectedRecord> = records
        .iter()
        .map(|record| project_record(record, baseline, settings))
        .collect();

    standings.sort_by(|a, b| {
        b.final_points
            .total_cmp(&a.final_points)
            .then_with(|| b.final_wins.total_cmp(&a.final_wins))
            .then_with(|| b.final_goal_diff.total_cmp(&a.final_goal_diff))
            .then_with(|| b.final_goals_for.total_cmp(&a.final_goals_for))
    });
    standings
}

// ── Tests ────────────────────────────────────────────────────────────────────
