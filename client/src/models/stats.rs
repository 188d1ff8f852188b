//! Per-match statistics models.

use serde::Deserialize;

/// One player's box score for one match, as served by `player-stats/`.
///
/// The shooting percentages are backend-computed projections already scaled
/// to 0–100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerStats {
    /// Stable record identifier.
    pub id: i64,
    /// Identifier of the player.
    pub player: i64,
    /// Display name of the player.
    pub player_name: String,
    /// Identifier of the match.
    #[serde(rename = "match")]
    pub match_id: i64,
    /// Human-readable match description.
    pub match_info: String,
    /// Minutes on court.
    pub minutes_played: i32,
    /// Points scored.
    pub points: i32,
    /// Assists made.
    pub assists: i32,
    /// Total rebounds.
    pub rebounds: i32,
    /// Offensive rebounds.
    pub offensive_rebounds: i32,
    /// Defensive rebounds.
    pub defensive_rebounds: i32,
    /// Steals.
    pub steals: i32,
    /// Blocks.
    pub blocks: i32,
    /// Turnovers.
    pub turnovers: i32,
    /// Personal fouls.
    pub personal_fouls: i32,
    /// Field goals made.
    pub field_goals_made: i32,
    /// Field goals attempted.
    pub field_goals_attempted: i32,
    /// Three-pointers made.
    pub three_pointers_made: i32,
    /// Three-pointers attempted.
    pub three_pointers_attempted: i32,
    /// Free throws made.
    pub free_throws_made: i32,
    /// Free throws attempted.
    pub free_throws_attempted: i32,
    /// Plus/minus while on court.
    pub plus_minus: i32,
    /// Field-goal percentage (0–100).
    pub field_goal_percentage: f64,
    /// Three-point percentage (0–100).
    pub three_point_percentage: f64,
    /// Free-throw percentage (0–100).
    pub free_throw_percentage: f64,
}

/// One team's totals for one match, as served by `team-stats/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamStats {
    /// Stable record identifier.
    pub id: i64,
    /// Identifier of the team.
    pub team: i64,
    /// Name of the team.
    pub team_name: String,
    /// Identifier of the match.
    #[serde(rename = "match")]
    pub match_id: i64,
    /// Human-readable match description.
    pub match_info: String,
    /// Points scored.
    pub points: i32,
    /// Assists made.
    pub assists: i32,
    /// Total rebounds.
    pub rebounds: i32,
    /// Offensive rebounds.
    pub offensive_rebounds: i32,
    /// Defensive rebounds.
    pub defensive_rebounds: i32,
    /// Steals.
    pub steals: i32,
    /// Blocks.
    pub blocks: i32,
    /// Turnovers.
    pub turnovers: i32,
    /// Personal fouls.
    pub personal_fouls: i32,
    /// Field goals made.
    pub field_goals_made: i32,
    /// Field goals attempted.
    pub field_goals_attempted: i32,
    /// Three-pointers made.
    pub three_pointers_made: i32,
    /// Three-pointers attempted.
    pub three_pointers_attempted: i32,
    /// Free throws made.
    pub free_throws_made: i32,
    /// Free throws attempted.
    pub free_throws_attempted: i32,
    /// Field-goal percentage (0–100).
    pub field_goal_percentage: f64,
    /// Three-point percentage (0–100).
    pub three_point_percentage: f64,
    /// Free-throw percentage (0–100).
    pub free_throw_percentage: f64,
}
