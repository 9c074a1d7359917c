//! Classifier seam used by the prediction service

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::obesity::{FeatureRecord, ObesityLevel};

#[cfg(test)]
use mockall::automock;

/// Description of a trained model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub algorithm: &'static str,
    pub criterion: &'static str,
    pub n_samples: usize,
    pub feature_names: Vec<&'static str>,
    pub classes: Vec<ObesityLevel>,
    pub depth: usize,
    pub n_leaves: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
}

/// Maps a feature record to an obesity level
#[cfg_attr(test, automock)]
pub trait ObesityClassifier: Send + Sync {
    /// Classify one record
    fn classify(&self, features: &FeatureRecord) -> Result<ObesityLevel, DomainError>;

    /// Describe the trained model
    fn summary(&self) -> ModelSummary;
}
