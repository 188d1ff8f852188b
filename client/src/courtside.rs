//! Top-level wiring of the client's cooperating pieces.
//!
//! [`Courtside`] builds the session handle, gateway, controller, auth
//! context, and prediction service once, then exposes a typed surface over
//! the five backend collections: paginated lists (fail-soft), detail and
//! sub-resource reads (propagating), and mutations.

use std::sync::Arc;

use pagination::{Page, PageNumber};
use url::Url;

use crate::domain::auth_context::AuthContext;
use crate::domain::error::ApiResult;
use crate::domain::gateway::{ApiGateway, GatewayConfigError};
use crate::domain::ports::{ApiTransport, TokenStore};
use crate::domain::predictions::PredictionService;
use crate::domain::query::{Filters, ResourcePath};
use crate::domain::resource_controller::ResourceController;
use crate::domain::resources::{
    MatchFilters, PlayerFilters, PlayerStatsFilters, TeamFilters, TeamStatsFilters,
};
use crate::domain::session::SessionHandle;
use crate::models::{Match, NewPlayer, NewTeam, Player, PlayerStats, Team, TeamStats};

/// The assembled client.
pub struct Courtside {
    gateway: Arc<ApiGateway>,
    controller: ResourceController,
    auth: AuthContext,
    predictions: PredictionService,
}

impl Courtside {
    /// Wire the client over a transport and a token store.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayConfigError`] when `base_url` cannot serve as a
    /// request base.
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        base_url: Url,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, GatewayConfigError> {
        let session = SessionHandle::new();
        let gateway = Arc::new(ApiGateway::new(transport, base_url, session.clone())?);
        Ok(Self {
            controller: ResourceController::new(Arc::clone(&gateway)),
            auth: AuthContext::new(Arc::clone(&gateway), session, store),
            predictions: PredictionService::new(Arc::clone(&gateway)),
            gateway,
        })
    }

    /// The session lifecycle service.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// The paginated-list loader.
    pub fn controller(&self) -> &ResourceController {
        &self.controller
    }

    /// The prediction endpoints.
    pub fn predictions(&self) -> &PredictionService {
        &self.predictions
    }

    /// The shared request layer, for callers addressing resources directly.
    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// One page of teams.
    pub async fn teams(&self, filters: &TeamFilters, page: PageNumber) -> Page<Team> {
        self.controller.load_page(&filters.query(page)).await
    }

    /// One page of players.
    pub async fn players(&self, filters: &PlayerFilters, page: PageNumber) -> Page<Player> {
        self.controller.load_page(&filters.query(page)).await
    }

    /// One page of matches.
    pub async fn matches(&self, filters: &MatchFilters, page: PageNumber) -> Page<Match> {
        self.controller.load_page(&filters.query(page)).await
    }

    /// One page of per-player box scores.
    pub async fn player_stats(
        &self,
        filters: &PlayerStatsFilters,
        page: PageNumber,
    ) -> Page<PlayerStats> {
        self.controller.load_page(&filters.query(page)).await
    }

    /// One page of per-team totals.
    pub async fn team_stats(
        &self,
        filters: &TeamStatsFilters,
        page: PageNumber,
    ) -> Page<TeamStats> {
        self.controller.load_page(&filters.query(page)).await
    }

    /// One team by id.
    pub async fn team(&self, id: i64) -> ApiResult<Team> {
        self.gateway
            .get(&ResourcePath::new("teams").item(id), &Filters::new())
            .await
    }

    /// Roster of one team.
    pub async fn team_players(&self, id: i64) -> ApiResult<Vec<Player>> {
        self.gateway
            .get(&ResourcePath::new("teams").nested(id, "players"), &Filters::new())
            .await
    }

    /// Fixture history of one team, most recent first.
    pub async fn team_matches(&self, id: i64) -> ApiResult<Vec<Match>> {
        self.gateway
            .get(&ResourcePath::new("teams").nested(id, "matches"), &Filters::new())
            .await
    }

    /// Per-match totals of one team, most recent first.
    pub async fn team_stat_history(&self, id: i64) -> ApiResult<Vec<TeamStats>> {
        self.gateway
            .get(&ResourcePath::new("teams").nested(id, "stats"), &Filters::new())
            .await
    }

    /// One player by id.
    pub async fn player(&self, id: i64) -> ApiResult<Player> {
        self.gateway
            .get(&ResourcePath::new("players").item(id), &Filters::new())
            .await
    }

    /// Box scores of one player, most recent first.
    pub async fn player_stat_history(&self, id: i64) -> ApiResult<Vec<PlayerStats>> {
        self.gateway
            .get(&ResourcePath::new("players").nested(id, "stats"), &Filters::new())
            .await
    }

    /// Matches one player appeared in, most recent first.
    pub async fn player_matches(&self, id: i64) -> ApiResult<Vec<Match>> {
        self.gateway
            .get(&ResourcePath::new("players").nested(id, "matches"), &Filters::new())
            .await
    }

    /// One match by id.
    pub async fn match_detail(&self, id: i64) -> ApiResult<Match> {
        self.gateway
            .get(&ResourcePath::new("matches").item(id), &Filters::new())
            .await
    }

    /// All player box scores of one match.
    pub async fn match_player_stats(&self, id: i64) -> ApiResult<Vec<PlayerStats>> {
        self.gateway
            .get(
                &ResourcePath::new("matches").nested(id, "player_stats"),
                &Filters::new(),
            )
            .await
    }

    /// Both teams' totals for one match.
    pub async fn match_team_stats(&self, id: i64) -> ApiResult<Vec<TeamStats>> {
        self.gateway
            .get(
                &ResourcePath::new("matches").nested(id, "team_stats"),
                &Filters::new(),
            )
            .await
    }

    /// Create a team.
    pub async fn create_team(&self, team: &NewTeam) -> ApiResult<Team> {
        self.gateway.post(&ResourcePath::new("teams"), team).await
    }

    /// Replace a team.
    pub async fn update_team(&self, id: i64, team: &NewTeam) -> ApiResult<Team> {
        self.gateway
            .put(&ResourcePath::new("teams").item(id), team)
            .await
    }

    /// Create a player.
    pub async fn create_player(&self, player: &NewPlayer) -> ApiResult<Player> {
        self.gateway.post(&ResourcePath::new("players"), player).await
    }

    /// Replace a player.
    pub async fn update_player(&self, id: i64, player: &NewPlayer) -> ApiResult<Player> {
        self.gateway
            .put(&ResourcePath::new("players").item(id), player)
            .await
    }

    /// Remove any resource item by collection path and id.
    pub async fn delete_resource(&self, collection: &ResourcePath, id: i64) -> ApiResult<()> {
        self.gateway.delete(&collection.item(id)).await
    }
}
