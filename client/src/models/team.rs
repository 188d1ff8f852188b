//! Team resource models.

use serde::{Deserialize, Serialize};

/// A franchise as served by `teams/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Stable team identifier.
    pub id: i64,
    /// Franchise name.
    pub name: String,
    /// Short ticker form, e.g. `BOS`.
    pub abbreviation: String,
    /// Home city.
    pub city: String,
    /// Conference the team plays in.
    pub conference: String,
    /// Division within the conference.
    pub division: String,
    /// Optional crest image URL.
    pub logo: Option<String>,
}

/// Payload for creating or replacing a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    /// Franchise name.
    pub name: String,
    /// Short ticker form.
    pub abbreviation: String,
    /// Home city.
    pub city: String,
    /// Conference the team plays in.
    pub conference: String,
    /// Division within the conference.
    pub division: String,
    /// Optional crest image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
