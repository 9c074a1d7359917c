//! Classifier domain - tree parameters and the seam around the fitted model

mod params;
mod traits;

pub use params::TreeParams;
#[cfg(test)]
pub use traits::MockObesityClassifier;
pub use traits::{ModelSummary, ObesityClassifier};
