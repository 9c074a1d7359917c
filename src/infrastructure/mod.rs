//! Infrastructure layer - Classifier implementations, services and observability

pub mod classifier;
pub mod observability;
pub mod services;
