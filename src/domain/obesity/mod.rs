//! Obesity domain - labels, feature records and the training sample

mod dataset;
mod features;
mod level;

pub use dataset::{training_sample, LabeledRecord};
pub use features::{FeatureRecord, FEATURE_COUNT, FEATURE_NAMES};
pub use level::{Advice, AdviceKind, ObesityLevel, UnknownLevelCode};
