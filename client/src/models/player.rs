//! Player resource models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rostered player as served by `players/`.
///
/// `team_name`, `full_name`, and `age` are read-only projections the backend
/// computes; they never appear in write payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    /// Stable player identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Backend-computed display name.
    pub full_name: String,
    /// Identifier of the player's team.
    pub team: i64,
    /// Name of the player's team.
    pub team_name: String,
    /// Court position code (`PG`, `SG`, `SF`, `PF`, `C`).
    pub position: String,
    /// Shirt number.
    pub jersey_number: i32,
    /// Height in metres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Backend-computed age in years.
    pub age: u32,
    /// Whether the player is currently rostered.
    pub is_active: bool,
}

/// Payload for creating or replacing a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlayer {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Identifier of the player's team.
    pub team: i64,
    /// Court position code.
    pub position: String,
    /// Shirt number.
    pub jersey_number: i32,
    /// Height in metres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Whether the player is currently rostered.
    pub is_active: bool,
}
