//! Feature record fed to the classifier

use serde::{Deserialize, Serialize};

/// Column order of the model's input
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["Age", "Weight", "Height", "FHWO", "FAVC", "FAF"];

pub const FEATURE_COUNT: usize = 6;

/// One row of model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub age: f64,
    /// Kilograms
    pub weight: f64,
    /// Meters
    pub height: f64,
    /// Family history with overweight (0 or 1)
    pub fhwo: u8,
    /// Frequent consumption of high-calorie food (0 or 1)
    pub favc: u8,
    /// Physical activity bucket (0..=3)
    pub faf: u8,
}

impl FeatureRecord {
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.weight,
            self.height,
            f64::from(self.fhwo),
            f64::from(self.favc),
            f64::from(self.faf),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_follows_column_order() {
        let record = FeatureRecord {
            age: 30.0,
            weight: 70.0,
            height: 1.7,
            fhwo: 1,
            favc: 0,
            faf: 2,
        };

        assert_eq!(record.to_vector(), [30.0, 70.0, 1.7, 1.0, 0.0, 2.0]);
        assert_eq!(FEATURE_NAMES[5], "FAF");
    }
}
