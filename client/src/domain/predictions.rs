//! Prediction requests against the backend's model endpoints.
//!
//! Predictions are write-style calls: failures always propagate. The
//! backend's envelope nests the interesting numbers inside a JSON string
//! (`prediction_data`), so every call decodes twice — once for the envelope,
//! once for the typed payload.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::error::{ApiError, ApiResult, body_preview};
use crate::domain::gateway::ApiGateway;
use crate::domain::query::ResourcePath;
use crate::models::{MatchOutcome, PlayerComparison, PlayerPerformance, Prediction};

/// A decoded prediction: the model's confidence plus its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicted<T> {
    /// Model confidence in the 0–1 range.
    pub confidence: f64,
    /// Second-stage payload decoded from `prediction_data`.
    pub payload: T,
}

/// Client for the three prediction endpoints.
pub struct PredictionService {
    gateway: Arc<ApiGateway>,
}

impl PredictionService {
    /// Build a prediction client over the shared gateway.
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Predict one player's stat line for a match.
    pub async fn player_performance(
        &self,
        player_id: i64,
        match_id: i64,
    ) -> ApiResult<Predicted<PlayerPerformance>> {
        let path = ResourcePath::new("players").nested(player_id, "predict_performance");
        let prediction: Prediction = self
            .gateway
            .post(&path, &json!({ "match_id": match_id }))
            .await?;
        decode_predicted(&prediction)
    }

    /// Predict the outcome of a match.
    pub async fn match_outcome(&self, match_id: i64) -> ApiResult<Predicted<MatchOutcome>> {
        let path = ResourcePath::new("matches").nested(match_id, "predict_outcome");
        let prediction: Prediction = self.gateway.post(&path, &json!({})).await?;
        decode_predicted(&prediction)
    }

    /// Compare two players' averaged stat lines.
    pub async fn compare_players(
        &self,
        player1_id: i64,
        player2_id: i64,
    ) -> ApiResult<Predicted<PlayerComparison>> {
        let path = ResourcePath::new("predictions/compare_players");
        let prediction: Prediction = self
            .gateway
            .post(
                &path,
                &json!({ "player1_id": player1_id, "player2_id": player2_id }),
            )
            .await?;
        decode_predicted(&prediction)
    }
}

fn decode_predicted<T: DeserializeOwned>(prediction: &Prediction) -> ApiResult<Predicted<T>> {
    let payload = serde_json::from_str(&prediction.prediction_data).map_err(|err| {
        ApiError::malformed(format!(
            "undecodable prediction payload ({err}): {}",
            body_preview(prediction.prediction_data.as_bytes())
        ))
    })?;
    Ok(Predicted {
        confidence: prediction.confidence,
        payload,
    })
}
