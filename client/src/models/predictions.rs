//! Prediction payloads.
//!
//! The backend wraps every prediction in the same envelope: a confidence
//! score plus `prediction_data`, a JSON value serialised *as a string* that
//! must be decoded a second time into the shape matching the prediction
//! type. The typed payloads below are those second-stage shapes.

use serde::Deserialize;

/// Envelope returned by every prediction endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// Kind discriminator, e.g. `PLAYER_PERFORMANCE`.
    pub prediction_type: String,
    /// Model confidence in the 0–1 range.
    pub confidence: f64,
    /// JSON-as-string payload; see the typed shapes in this module.
    pub prediction_data: String,
    /// Name of the model that produced the prediction.
    pub model_name: Option<String>,
    /// Version of the model that produced the prediction.
    pub model_version: Option<String>,
}

/// One averaged stat line, shared by performance and comparison payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatLine {
    /// Predicted points.
    pub points: f64,
    /// Predicted rebounds.
    pub rebounds: f64,
    /// Predicted assists.
    pub assists: f64,
    /// Predicted steals.
    pub steals: f64,
    /// Predicted blocks.
    pub blocks: f64,
    /// Predicted field-goal percentage (0–1).
    pub field_goal_percentage: f64,
    /// Predicted three-point percentage (0–1).
    pub three_point_percentage: f64,
    /// Predicted free-throw percentage (0–1).
    pub free_throw_percentage: f64,
}

/// Payload of `players/{id}/predict_performance/`.
pub type PlayerPerformance = StatLine;

/// Payload of `matches/{id}/predict_outcome/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchOutcome {
    /// Name of the predicted winner.
    pub winner_name: String,
    /// Name of the home team.
    pub home_team_name: String,
    /// Name of the away team.
    pub away_team_name: String,
    /// Predicted home score.
    pub home_team_score: f64,
    /// Predicted away score.
    pub away_team_score: f64,
    /// Predicted margin, signed towards the home team.
    pub point_difference: f64,
}

/// Payload of `predictions/compare_players/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerComparison {
    /// Display name of the first player.
    pub player1_name: String,
    /// Display name of the second player.
    pub player2_name: String,
    /// Averaged stat line of the first player.
    pub player1_stats: StatLine,
    /// Averaged stat line of the second player.
    pub player2_stats: StatLine,
    /// Backend-written comparison summary.
    pub summary: String,
}
