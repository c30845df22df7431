use std::fmt::Write as _;

use crate::table::ProjectedRecord;

/// Size of the bottom block of the ranked table subject to demotion.
pub const RELEGATION_SPOTS: usize = 4;

/// The teams occupying the bottom ranked positions.
pub fn relegation_zone(standings: &[ProjectedRecord]) -> &[ProjectedRecord] {
    let start = standings.len().saturating_sub(RELEGATION_SPOTS);
    &standings[start..]
}

/// Render the ranked console listing, ending with the projected relegated
/// teams. Projected values are rounded to whole numbers here only; the
/// records themselves keep full precision.
pub fn render(standings: &[ProjectedRecord]) -> String {
    let mut out = String::new();
    out.push_str("== PROJEÇÃO DE TÍTULO E REBAIXAMENTO ==\n");

    for (idx, row) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:2}. {:<20} {:.0} pts (V proj: {:.0}, SG proj: {:.0}) (pts atuais: {}, jogos atuais: {})",
            idx + 1,
            row.current.team,
            row.final_points,
            row.final_wins,
            row.final_goal_diff,
            row.current.points,
            row.current.played,
        );
    }

    let relegated: Vec<&str> = relegation_zone(standings)
        .iter()
        .map(|row| row.current.team.as_str())
        .collect();
    let _ = writeln!(out, "\nRebaixados projetados: {}", relegated.join(", "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project_table, LeagueBaseline, ProjectionSettings};
    use crate::table::TableRecord;

    fn standings() -> Vec<ProjectedRecord> {
        let records: Vec<TableRecord> = (0..6)
            .map(|i| TableRecord {
                team: format!("Time {}", i + 1),
                points: 30 - 4 * i,
                played: 15,
                goals_for: 20 - 2 * i,
                goals_against: 10 + i,
                goal_diff: (20 - 2 * i) as i32 - (10 + i) as i32,
                wins: 9 - i,
            })
            .collect();
        let baseline = LeagueBaseline::compute(&records);
        project_table(&records, &baseline, &ProjectionSettings::default())
    }

    #[test]
    fn lists_every_team_in_rank_order() {
        let out = render(&standings());
        let pos_1 = out.find("Time 1").unwrap();
        let pos_6 = out.find("Time 6").unwrap();
        assert!(pos_1 < pos_6);
        assert!(out.lines().next().unwrap().contains("PROJEÇÃO"));
    }

    #[test]
    fn names_the_bottom_four_as_relegated() {
        let out = render(&standings());
        let line = out
            .lines()
            .find(|l| l.starts_with("Rebaixados projetados:"))
            .unwrap();
        for team in ["Time 3", "Time 4", "Time 5", "Time 6"] {
            assert!(line.contains(team), "missing {team} in: {line}");
        }
        assert!(!line.contains("Time 2"));
    }

    #[test]
    fn relegation_zone_of_a_short_table_is_the_whole_table() {
        let rows = standings();
        assert_eq!(relegation_zone(&rows[..3]).len(), 3);
        assert_eq!(relegation_zone(&rows).len(), RELEGATION_SPOTS);
    }

    #[test]
    fn displays_whole_numbers_only() {
        let out = render(&standings());
        for line in out.lines().filter(|l| l.contains("pts (")) {
            // Skip the "NN. " rank prefix; nothing after it may carry decimals.
            assert!(
                !line[3..].contains('.'),
                "projected values should round at display: {line}"
            );
        }
    }
}
