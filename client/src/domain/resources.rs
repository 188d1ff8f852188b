//! Typed filter sets for the five backend collections.
//!
//! Each filter struct carries exactly the fields the backend's list
//! endpoint filters on, and serialises through the truthy-only [`Filters`]
//! contract: an unset field simply does not appear in the query string.

use pagination::PageNumber;

use crate::domain::query::{Filters, ResourcePath, ResourceQuery};

/// Filters accepted by `teams/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilters {
    /// Restrict to one conference.
    pub conference: Option<String>,
    /// Restrict to one division.
    pub division: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
}

impl TeamFilters {
    /// Serialise into wire filters.
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with_opt_text("conference", self.conference.as_deref())
            .with_opt_text("division", self.division.as_deref())
            .with_opt_text("search", self.search.as_deref())
    }

    /// Describe a page of the filtered collection.
    pub fn query(&self, page: PageNumber) -> ResourceQuery {
        ResourceQuery::new(ResourcePath::new("teams"), self.to_filters(), page)
    }
}

/// Filters accepted by `players/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilters {
    /// Restrict to one team.
    pub team: Option<i64>,
    /// Restrict to one position code.
    pub position: Option<String>,
    /// Restrict by roster status; `Some(false)` selects inactive players.
    pub is_active: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
}

impl PlayerFilters {
    /// Serialise into wire filters.
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with_opt_id("team", self.team)
            .with_opt_text("position", self.position.as_deref())
            .with_opt_bool("is_active", self.is_active)
            .with_opt_text("search", self.search.as_deref())
    }

    /// Describe a page of the filtered collection.
    pub fn query(&self, page: PageNumber) -> ResourceQuery {
        ResourceQuery::new(ResourcePath::new("players"), self.to_filters(), page)
    }
}

/// Filters accepted by `matches/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilters {
    /// Restrict to fixtures hosted by one team.
    pub home_team: Option<i64>,
    /// Restrict to fixtures visited by one team.
    pub away_team: Option<i64>,
    /// Restrict to one season label.
    pub season: Option<String>,
    /// Restrict by playoff status; `Some(false)` selects regular-season
    /// fixtures.
    pub is_playoff: Option<bool>,
    /// Restrict by completion; `Some(false)` selects upcoming fixtures.
    pub is_completed: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
}

impl MatchFilters {
    /// Serialise into wire filters.
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with_opt_id("home_team", self.home_team)
            .with_opt_id("away_team", self.away_team)
            .with_opt_text("season", self.season.as_deref())
            .with_opt_bool("is_playoff", self.is_playoff)
            .with_opt_bool("is_completed", self.is_completed)
            .with_opt_text("search", self.search.as_deref())
    }

    /// Describe a page of the filtered collection.
    pub fn query(&self, page: PageNumber) -> ResourceQuery {
        ResourceQuery::new(ResourcePath::new("matches"), self.to_filters(), page)
    }
}

/// Filters accepted by `player-stats/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatsFilters {
    /// Restrict to one player.
    pub player: Option<i64>,
    /// Restrict to one match.
    pub match_id: Option<i64>,
}

impl PlayerStatsFilters {
    /// Serialise into wire filters.
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with_opt_id("player", self.player)
            .with_opt_id("match", self.match_id)
    }

    /// Describe a page of the filtered collection.
    pub fn query(&self, page: PageNumber) -> ResourceQuery {
        ResourceQuery::new(ResourcePath::new("player-stats"), self.to_filters(), page)
    }
}

/// Filters accepted by `team-stats/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStatsFilters {
    /// Restrict to one team.
    pub team: Option<i64>,
    /// Restrict to one match.
    pub match_id: Option<i64>,
}

impl TeamStatsFilters {
    /// Serialise into wire filters.
    pub fn to_filters(&self) -> Filters {
        Filters::new()
            .with_opt_id("team", self.team)
            .with_opt_id("match", self.match_id)
    }

    /// Describe a page of the filtered collection.
    pub fn query(&self, page: PageNumber) -> ResourceQuery {
        ResourceQuery::new(ResourcePath::new("team-stats"), self.to_filters(), page)
    }
}
