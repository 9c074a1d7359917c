//! Domain layer - Core business logic and entities

pub mod classifier;
pub mod error;
pub mod obesity;
pub mod survey;

pub use classifier::{ModelSummary, ObesityClassifier, TreeParams};
pub use error::DomainError;
pub use obesity::{
    training_sample, Advice, AdviceKind, FeatureRecord, LabeledRecord, ObesityLevel,
    FEATURE_COUNT, FEATURE_NAMES,
};
pub use survey::{exercise_bucket, Answer, Gender, SurveyInput, SurveyValidationError};
