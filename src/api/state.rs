//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, ModelSummary, ObesityClassifier, SurveyInput};
use crate::infrastructure::services::{Prediction, PredictionService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
}

impl AppState {
    pub fn new(prediction_service: Arc<dyn PredictionServiceTrait>) -> Self {
        Self { prediction_service }
    }
}

/// Trait for prediction service operations
#[async_trait::async_trait]
pub trait PredictionServiceTrait: Send + Sync {
    async fn predict(&self, input: &SurveyInput) -> Result<Prediction, DomainError>;
    fn model_summary(&self) -> ModelSummary;
}

#[async_trait::async_trait]
impl<C: ObesityClassifier + 'static> PredictionServiceTrait for PredictionService<C> {
    async fn predict(&self, input: &SurveyInput) -> Result<Prediction, DomainError> {
        PredictionService::predict(self, input).await
    }

    fn model_summary(&self) -> ModelSummary {
        PredictionService::model_summary(self)
    }
}
