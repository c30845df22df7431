use crate::table::TableRecord;

/// League-wide per-game averages, the prior every team is pulled toward.
///
/// Computed once per run over the teams with at least one game played, so
/// sides that have not kicked off yet do not dilute the rates. A league where
/// nobody has played yields all-zero averages, a valid "no information yet"
/// prior rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeagueBaseline {
    pub points_per_game: f64,
    pub goals_for_per_game: f64,
    pub goals_against_per_game: f64,
    pub wins_per_game: f64,
}

impl LeagueBaseline {
    pub fn compute(records: &[TableRecord]) -> Self {
        let mut total_played = 0u64;
        let mut total_points = 0u64;
        let mut total_goals_for = 0u64;
        let mut total_goals_against = 0u64;
        let mut total_wins = 0u64;

        for record in records.iter().filter(|r| r.played > 0) {
            total_played += u64::from(record.played);
            total_points += u64::from(record.points);
            total_goals_for += u64::from(record.goals_for);
            total_goals_against += u64::from(record.goals_against);
            total_wins += u64::from(record.wins);
        }

        if total_played == 0 {
            return Self::default();
        }

        let games = total_played as f64;
        LeagueBaseline {
            points_per_game: total_points as f64 / games,
            goals_for_per_game: total_goals_for as f64 / games,
            goals_against_per_game: total_goals_against as f64 / games,
            wins_per_game: total_wins as f64 / games,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(team: &str, points: u32, played: u32, gf: u32, ga: u32, wins: u32) -> TableRecord {
        TableRecord {
            team: team.into(),
            points,
            played,
            goals_for: gf,
            goals_against: ga,
            goal_diff: gf as i32 - ga as i32,
            wins,
        }
    }

    #[test]
    fn averages_over_all_games_played() {
        let records = vec![
            record("A", 30, 15, 20, 10, 9),
            record("B", 30, 15, 15, 12, 8),
        ];
        let baseline = LeagueBaseline::compute(&records);
        assert_relative_eq!(baseline.points_per_game, 2.0, epsilon = 1e-12);
        assert_relative_eq!(baseline.goals_for_per_game, 35.0 / 30.0, epsilon = 1e-12);
        assert_relative_eq!(baseline.goals_against_per_game, 22.0 / 30.0, epsilon = 1e-12);
        assert_relative_eq!(baseline.wins_per_game, 17.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn teams_without_games_do_not_dilute_the_baseline() {
        let mut records = vec![record("A", 20, 10, 12, 6, 6)];
        let with_played_only = LeagueBaseline::compute(&records);

        records.push(record("Estreante", 0, 0, 0, 0, 0));
        let with_newcomer = LeagueBaseline::compute(&records);

        assert_eq!(with_played_only, with_newcomer);
    }

    #[test]
    fn no_games_played_yields_zero_baseline() {
        let records = vec![
            record("A", 0, 0, 0, 0, 0),
            record("B", 0, 0, 0, 0, 0),
        ];
        assert_eq!(LeagueBaseline::compute(&records), LeagueBaseline::default());
    }

    #[test]
    fn empty_table_yields_zero_baseline() {
        assert_eq!(LeagueBaseline::compute(&[]), LeagueBaseline::default());
    }
}
