use thiserror::Error;

use super::survey::SurveyValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Prediction failed: {message}")]
    Prediction { message: String },

    #[error("Training failed: {message}")]
    Training { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn training(message: impl Into<String>) -> Self {
        Self::Training {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<SurveyValidationError> for DomainError {
    fn from(err: SurveyValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_survey_validation_error() {
        let error: DomainError = SurveyValidationError::NonFinite { field: "weight" }.into();
        assert!(matches!(error, DomainError::Validation { .. }));
        assert_eq!(
            error.to_string(),
            "Validation error: weight must be a finite number"
        );
    }

    #[test]
    fn test_prediction_error() {
        let error = DomainError::prediction("row has 5 features, expected 6");
        assert_eq!(
            error.to_string(),
            "Prediction failed: row has 5 features, expected 6"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("weight must be a finite number");
        assert_eq!(
            error.to_string(),
            "Validation error: weight must be a finite number"
        );
    }

    #[test]
    fn test_training_error() {
        let error = DomainError::training("no samples");
        assert_eq!(error.to_string(), "Training failed: no samples");
    }
}
