use serde::{Deserialize, Serialize};

/// A team's current standing, as decoded from the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Display name (`nome_popular` in the source feed)
    pub team: String,
    /// Points earned so far
    pub points: u32,
    /// Games played so far
    pub played: u32,
    /// Goals scored so far
    pub goals_for: u32,
    /// Goals conceded so far
    pub goals_against: u32,
    /// Current goal difference
    pub goal_diff: i32,
    /// Wins so far (first tie-break criterion after points)
    pub wins: u32,
}

/// A standing extended with projected end-of-season values.
///
/// Produced once by the projector and never mutated afterwards. All projected
/// fields keep full precision; rounding is a display concern of the report
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRecord {
    pub current: TableRecord,
    pub final_points: f64,
    pub final_wins: f64,
    pub final_goals_for: f64,
    pub final_goals_against: f64,
    /// Always `final_goals_for - final_goals_against`, never the current
    /// goal difference carried forward.
    pub final_goal_diff: f64,
}
