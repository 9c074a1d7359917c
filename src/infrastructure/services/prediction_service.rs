//! Prediction service - encode survey answers and classify them

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    DomainError, FeatureRecord, ModelSummary, ObesityClassifier, ObesityLevel, SurveyInput,
};
use crate::infrastructure::observability::record_prediction;

/// Outcome of one prediction request
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub id: Uuid,
    pub level: ObesityLevel,
    /// Answers after widget-range clamping
    pub input: SurveyInput,
    /// Encoded record the model actually saw
    pub features: FeatureRecord,
    pub created_at: DateTime<Utc>,
}

/// Runs the encode-and-classify path for one request
#[derive(Debug)]
pub struct PredictionService<C: ObesityClassifier> {
    classifier: Arc<C>,
}

impl<C: ObesityClassifier> PredictionService<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Clamp, encode and classify the survey answers
    pub async fn predict(&self, input: &SurveyInput) -> Result<Prediction, DomainError> {
        let input = input.clamped()?;
        let features = input.to_features();

        debug!(
            age = features.age,
            gender = %input.gender,
            weight = features.weight,
            height = features.height,
            fhwo = features.fhwo,
            favc = features.favc,
            faf = features.faf,
            "Encoded survey input"
        );

        let start = Instant::now();
        let result = self.classifier.classify(&features);
        let elapsed = start.elapsed();

        let level = match result {
            Ok(level) => level,
            Err(e) => {
                warn!(error = %e, "Prediction failed");
                record_prediction(None, elapsed);
                return Err(into_prediction_error(e));
            }
        };

        record_prediction(Some(level), elapsed);

        let prediction = Prediction {
            id: Uuid::new_v4(),
            level,
            input,
            features,
            created_at: Utc::now(),
        };

        info!(
            prediction_id = %prediction.id,
            level = %prediction.level,
            "Obesity level predicted"
        );

        Ok(prediction)
    }

    /// Describe the model behind this service
    pub fn model_summary(&self) -> ModelSummary {
        self.classifier.summary()
    }
}

/// Every classifier failure is reported to the user as a prediction failure
fn into_prediction_error(err: DomainError) -> DomainError {
    match err {
        DomainError::Prediction { .. } => err,
        other => DomainError::prediction(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::MockObesityClassifier;
    use crate::domain::{training_sample, Answer, TreeParams};
    use crate::infrastructure::classifier::DecisionTreeObesityClassifier;

    fn tree_service() -> PredictionService<DecisionTreeObesityClassifier> {
        let classifier =
            DecisionTreeObesityClassifier::train(training_sample(), TreeParams::default()).unwrap();
        PredictionService::new(Arc::new(classifier))
    }

    #[tokio::test]
    async fn test_predict_encodes_input() {
        let mut mock = MockObesityClassifier::new();
        mock.expect_classify()
            .withf(|features| features.faf == 2 && features.fhwo == 1 && features.favc == 0)
            .times(1)
            .returning(|_| Ok(ObesityLevel::Overweight));

        let service = PredictionService::new(Arc::new(mock));
        let input = SurveyInput {
            family_history: Answer::Yes,
            exercise_days: 4,
            ..SurveyInput::default()
        };

        let prediction = service.predict(&input).await.unwrap();
        assert_eq!(prediction.level, ObesityLevel::Overweight);
        assert_eq!(prediction.features.faf, 2);
    }

    #[tokio::test]
    async fn test_predict_clamps_before_encoding() {
        let mut mock = MockObesityClassifier::new();
        mock.expect_classify()
            .withf(|features| features.age == 65.0 && features.weight == 200.0)
            .returning(|_| Ok(ObesityLevel::Obesity));

        let service = PredictionService::new(Arc::new(mock));
        let input = SurveyInput {
            age: 99,
            weight: 450.0,
            ..SurveyInput::default()
        };

        let prediction = service.predict(&input).await.unwrap();
        assert_eq!(prediction.input.age, 65);
        assert_eq!(prediction.input.weight, 200.0);
    }

    #[tokio::test]
    async fn test_classifier_failure_becomes_prediction_error() {
        let mut mock = MockObesityClassifier::new();
        mock.expect_classify()
            .returning(|_| Err(DomainError::internal("tree exploded")));

        let service = PredictionService::new(Arc::new(mock));
        let err = service.predict(&SurveyInput::default()).await.unwrap_err();

        assert!(matches!(err, DomainError::Prediction { .. }));
        assert!(err.to_string().starts_with("Prediction failed:"));
        assert!(err.to_string().contains("tree exploded"));
    }

    #[tokio::test]
    async fn test_invalid_measurement_skips_classifier() {
        let mut mock = MockObesityClassifier::new();
        mock.expect_classify().never();

        let service = PredictionService::new(Arc::new(mock));
        let input = SurveyInput {
            weight: f64::NAN,
            ..SurveyInput::default()
        };

        let err = service.predict(&input).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_tree_backed_prediction_is_repeatable() {
        let service = tree_service();
        let input = SurveyInput::default();

        let first = service.predict(&input).await.unwrap();
        let second = service.predict(&input).await.unwrap();

        assert_eq!(first.level, second.level);
        assert_ne!(first.id, second.id);
        assert_eq!(
            first.features,
            FeatureRecord {
                age: 30.0,
                weight: 70.0,
                height: 1.70,
                fhwo: 0,
                favc: 0,
                faf: 1,
            }
        );
    }

    #[test]
    fn test_model_summary_passthrough() {
        let summary = tree_service().model_summary();
        assert_eq!(summary.algorithm, "decision_tree");
    }
}
