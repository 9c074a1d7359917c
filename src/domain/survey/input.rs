//! Raw survey answers as submitted by the form or the JSON API

use std::fmt;

use serde::{Deserialize, Serialize};

use super::discretize::exercise_bucket;
use super::validation::{
    clamp_to, validate_measurement, SurveyValidationError, AGE_RANGE, DEFAULT_AGE,
    DEFAULT_EXERCISE_DAYS, DEFAULT_HEIGHT, DEFAULT_WEIGHT, EXERCISE_DAYS_RANGE, HEIGHT_RANGE,
    WEIGHT_RANGE,
};
use crate::domain::obesity::FeatureRecord;

/// Recorded with the survey but not used by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Yes/no radio answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    #[default]
    No,
    Yes,
}

impl Answer {
    /// 0/1 flag as the model expects it
    pub fn as_flag(&self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

/// Survey answers before encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyInput {
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Kilograms
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Meters
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub family_history: Answer,
    #[serde(default)]
    pub high_calorie_food: Answer,
    #[serde(default = "default_exercise_days")]
    pub exercise_days: u8,
}

fn default_age() -> u32 {
    DEFAULT_AGE
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_exercise_days() -> u8 {
    DEFAULT_EXERCISE_DAYS
}

impl Default for SurveyInput {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Gender::default(),
            weight: DEFAULT_WEIGHT,
            height: DEFAULT_HEIGHT,
            family_history: Answer::default(),
            high_calorie_food: Answer::default(),
            exercise_days: DEFAULT_EXERCISE_DAYS,
        }
    }
}

impl SurveyInput {
    /// Clamp every answer into its widget range.
    ///
    /// Fails only for measurements that are not finite numbers.
    pub fn clamped(&self) -> Result<Self, SurveyValidationError> {
        validate_measurement("weight", self.weight)?;
        validate_measurement("height", self.height)?;

        Ok(Self {
            age: clamp_to(self.age, &AGE_RANGE),
            gender: self.gender,
            weight: clamp_to(self.weight, &WEIGHT_RANGE),
            height: clamp_to(self.height, &HEIGHT_RANGE),
            family_history: self.family_history,
            high_calorie_food: self.high_calorie_food,
            exercise_days: clamp_to(self.exercise_days, &EXERCISE_DAYS_RANGE),
        })
    }

    /// Encode the answers into the model's feature record
    pub fn to_features(&self) -> FeatureRecord {
        FeatureRecord {
            age: f64::from(self.age),
            weight: self.weight,
            height: self.height,
            fhwo: self.family_history.as_flag(),
            favc: self.high_calorie_food.as_flag(),
            faf: exercise_bucket(self.exercise_days),
        }
    }
}
