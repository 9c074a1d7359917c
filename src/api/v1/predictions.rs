//! Prediction endpoint handlers

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CategoriesResponse, Json, PredictionResponse};
use crate::domain::SurveyInput;

/// POST /v1/predictions
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(input): Json<SurveyInput>,
) -> Result<Json<PredictionResponse>, ApiError> {
    debug!(?input, "Creating prediction");

    let prediction = state
        .prediction_service
        .predict(&input)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(prediction.into()))
}

/// GET /v1/categories
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse::all())
}
