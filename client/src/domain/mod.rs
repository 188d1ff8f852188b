//! Domain services and value types.
//!
//! Purpose: everything transport-agnostic — the error taxonomy, session
//! state, query values, and the three cooperating services (auth context,
//! gateway, resource controller). Adapters live under `outbound` and only
//! touch the ports defined here.

pub mod auth;
pub mod auth_context;
pub mod error;
pub mod gateway;
pub mod ports;
pub mod predictions;
pub mod query;
pub mod resource_controller;
pub mod resources;
pub mod session;

pub use self::auth::{LoginCredentials, LoginValidationError, Registration,
    RegistrationValidationError};
pub use self::auth_context::AuthContext;
pub use self::error::{ApiError, ApiResult};
pub use self::gateway::{ApiGateway, GatewayConfigError};
pub use self::ports::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, TokenStore,
    TokenStoreError, TransportError};
pub use self::predictions::{Predicted, PredictionService};
pub use self::query::{Filters, ResourcePath, ResourcePathError, ResourceQuery};
pub use self::resource_controller::{LoadOutcome, ResourceController};
pub use self::resources::{MatchFilters, PlayerFilters, PlayerStatsFilters, TeamFilters,
    TeamStatsFilters};
pub use self::session::{AuthState, Session, SessionHandle};
