//! Survey domain - form answers and how they are encoded for the model

mod discretize;
mod input;
mod validation;

pub use discretize::{exercise_bucket, MAX_EXERCISE_BUCKET};
pub use input::{Answer, Gender, SurveyInput};
pub use validation::{
    validate_measurement, SurveyValidationError, AGE_RANGE, EXERCISE_DAYS_RANGE, HEIGHT_RANGE,
    WEIGHT_RANGE,
};
