//! Prediction API types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Advice, FeatureRecord, ModelSummary, ObesityLevel, SurveyInput};
use crate::infrastructure::services::Prediction;

/// A level with its presentation attributes
#[derive(Debug, Clone, Serialize)]
pub struct LevelView {
    pub code: ObesityLevel,
    pub text: &'static str,
    pub color: &'static str,
}

impl From<ObesityLevel> for LevelView {
    fn from(level: ObesityLevel) -> Self {
        Self {
            code: level,
            text: level.display_text(),
            color: level.color(),
        }
    }
}

/// POST /v1/predictions response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub id: Uuid,
    pub object: &'static str,
    pub level: LevelView,
    pub advice: Advice,
    pub input: SurveyInput,
    pub features: FeatureRecord,
    pub created_at: DateTime<Utc>,
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            id: prediction.id,
            object: "prediction",
            level: prediction.level.into(),
            advice: prediction.level.advice(),
            input: prediction.input,
            features: prediction.features,
            created_at: prediction.created_at,
        }
    }
}

/// GET /v1/categories response
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub object: &'static str,
    pub data: Vec<LevelView>,
}

impl CategoriesResponse {
    pub fn all() -> Self {
        Self {
            object: "list",
            data: ObesityLevel::ALL.into_iter().map(LevelView::from).collect(),
        }
    }
}

/// GET /v1/model response
#[derive(Debug, Clone, Serialize)]
pub struct ModelResponse {
    pub object: &'static str,
    #[serde(flatten)]
    pub summary: ModelSummary,
}

impl From<ModelSummary> for ModelResponse {
    fn from(summary: ModelSummary) -> Self {
        Self {
            object: "model",
            summary,
        }
    }
}
