//! Survey input ranges and validation

use std::fmt;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 15..=65;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;
pub const HEIGHT_RANGE: RangeInclusive<f64> = 1.0..=2.5;
pub const EXERCISE_DAYS_RANGE: RangeInclusive<u8> = 0..=7;

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_WEIGHT: f64 = 70.0;
pub const DEFAULT_HEIGHT: f64 = 1.70;
pub const DEFAULT_EXERCISE_DAYS: u8 = 2;

/// Survey validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyValidationError {
    /// A measurement is NaN or infinite
    NonFinite { field: &'static str },
}

impl fmt::Display for SurveyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for SurveyValidationError {}

/// Reject measurements that cannot be clamped into a widget range
pub fn validate_measurement(field: &'static str, value: f64) -> Result<(), SurveyValidationError> {
    if !value.is_finite() {
        return Err(SurveyValidationError::NonFinite { field });
    }

    Ok(())
}

pub(crate) fn clamp_to<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_measurement() {
        assert!(validate_measurement("weight", 70.0).is_ok());
        assert_eq!(
            validate_measurement("weight", f64::NAN),
            Err(SurveyValidationError::NonFinite { field: "weight" })
        );
        assert!(validate_measurement("height", f64::INFINITY).is_err());
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(clamp_to(10, &AGE_RANGE), 15);
        assert_eq!(clamp_to(80, &AGE_RANGE), 65);
        assert_eq!(clamp_to(40, &AGE_RANGE), 40);
        assert_eq!(clamp_to(2.9, &HEIGHT_RANGE), 2.5);
    }

    #[test]
    fn test_error_message() {
        let err = SurveyValidationError::NonFinite { field: "height" };
        assert_eq!(err.to_string(), "height must be a finite number");
    }
}
