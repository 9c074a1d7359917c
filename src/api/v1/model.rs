//! Model summary endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{Json, ModelResponse};

/// GET /v1/model
pub async fn get_model(State(state): State<AppState>) -> Json<ModelResponse> {
    Json(state.prediction_service.model_summary().into())
}
