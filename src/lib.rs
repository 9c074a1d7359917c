//! Obesity Predictor
//!
//! A survey form and JSON API backed by a decision-tree classifier that is
//! trained at startup on a small inline sample:
//! - Exercise frequency discretized to the scale the model was trained on
//! - Gini decision tree fitted with linfa, deterministic for a fixed sample
//! - Color-coded result and advice for each predicted level

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::training_sample;
use infrastructure::classifier::DecisionTreeObesityClassifier;
use infrastructure::services::PredictionService;

/// Train the classifier and wire the application state
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let params = config.model.tree_params();
    let classifier = DecisionTreeObesityClassifier::train(training_sample(), params)?;

    info!(
        max_depth = ?params.max_depth,
        min_samples_split = params.min_samples_split,
        "Classifier ready"
    );

    let prediction_service = PredictionService::new(Arc::new(classifier));

    Ok(AppState::new(Arc::new(prediction_service)))
}
