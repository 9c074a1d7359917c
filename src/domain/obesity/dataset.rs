//! Inline training sample

use super::features::FeatureRecord;
use super::level::ObesityLevel;

/// A labeled row of the training sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledRecord {
    pub features: FeatureRecord,
    pub level: ObesityLevel,
}

const fn row(
    age: f64,
    weight: f64,
    height: f64,
    fhwo: u8,
    favc: u8,
    faf: u8,
    level: ObesityLevel,
) -> LabeledRecord {
    LabeledRecord {
        features: FeatureRecord {
            age,
            weight,
            height,
            fhwo,
            favc,
            faf,
        },
        level,
    }
}

use ObesityLevel::{InsufficientWeight as IW, Normal as N, Obesity as O, Overweight as OW};

static TRAINING_SAMPLE: [LabeledRecord; 10] = [
    row(25.0, 60.0, 1.70, 0, 0, 3, N),
    row(45.0, 95.0, 1.75, 1, 1, 1, O),
    row(19.0, 55.0, 1.65, 0, 0, 2, IW),
    row(30.0, 110.0, 1.80, 1, 1, 0, O),
    row(50.0, 70.0, 1.60, 1, 1, 1, OW),
    row(22.0, 80.0, 1.85, 0, 0, 2, OW),
    row(35.0, 105.0, 1.72, 1, 1, 0, O),
    row(28.0, 65.0, 1.68, 0, 0, 3, N),
    row(55.0, 85.0, 1.70, 1, 1, 1, OW),
    row(30.0, 120.0, 1.80, 1, 1, 0, O),
];

/// The fixed sample the classifier is trained on at startup
pub fn training_sample() -> &'static [LabeledRecord] {
    &TRAINING_SAMPLE
}
