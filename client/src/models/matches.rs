//! Match resource model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A fixture as served by `matches/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Match {
    /// Stable match identifier.
    pub id: i64,
    /// Identifier of the home team.
    pub home_team: i64,
    /// Identifier of the away team.
    pub away_team: i64,
    /// Name of the home team.
    pub home_team_name: String,
    /// Name of the away team.
    pub away_team_name: String,
    /// Tip-off timestamp.
    pub date: DateTime<Utc>,
    /// Season label, e.g. `2024-25`.
    pub season: String,
    /// Home score, absent until the match completes.
    pub home_score: Option<i32>,
    /// Away score, absent until the match completes.
    pub away_score: Option<i32>,
    /// Whether this is a playoff fixture.
    pub is_playoff: bool,
    /// Whether the match has been played.
    pub is_completed: bool,
}

impl Match {
    /// Human-readable score line, `TBD` until the match completes.
    pub fn score_line(&self) -> String {
        match (self.is_completed, self.home_score, self.away_score) {
            (true, Some(home), Some(away)) => format!("{home} - {away}"),
            _ => "TBD".to_owned(),
        }
    }
}
