//! Wire models for the backend's resources.
//!
//! Purpose: strongly typed views of the JSON the backend serves, limited to
//! the fields clients render or filter on. Decoding ignores fields this
//! client has no use for; write payloads are separate types so read models
//! stay read-only.

pub mod auth;
pub mod matches;
pub mod player;
pub mod predictions;
pub mod stats;
pub mod team;

pub use self::auth::{Identity, RegisteredAccount, TokenGrant};
pub use self::matches::Match;
pub use self::player::{NewPlayer, Player};
pub use self::predictions::{
    MatchOutcome, PlayerComparison, PlayerPerformance, Prediction, StatLine,
};
pub use self::stats::{PlayerStats, TeamStats};
pub use self::team::{NewTeam, Team};
