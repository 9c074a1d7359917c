//! Obesity level labels and how each one is presented

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Predicted obesity category.
///
/// Serialized with the short codes used in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObesityLevel {
    #[serde(rename = "IW")]
    InsufficientWeight,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "OW")]
    Overweight,
    #[serde(rename = "O")]
    Obesity,
}

/// Tone of the advice shown below a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Success,
    Info,
    Warning,
}

/// Advice attached to a predicted level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub message: &'static str,
}

const HIGH_RISK_ADVICE: &str = "You are at high risk. Consult a doctor or dietitian to plan \
     your weight management, increase your exercise and keep your eating habits regular.";

impl ObesityLevel {
    /// All levels, in presentation order
    pub const ALL: [ObesityLevel; 4] = [
        Self::InsufficientWeight,
        Self::Normal,
        Self::Overweight,
        Self::Obesity,
    ];

    /// Short code as it appears in the training data
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "IW",
            Self::Normal => "N",
            Self::Overweight => "OW",
            Self::Obesity => "O",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "Insufficient Weight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity Type I/II/III",
        }
    }

    /// Color name used for the result box
    pub fn color(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "blue",
            Self::Normal => "green",
            Self::Overweight => "orange",
            Self::Obesity => "red",
        }
    }

    /// Hex value of [`Self::color`], so a translucent tint can be derived from it
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "#1E88E5",
            Self::Normal => "#43A047",
            Self::Overweight => "#FB8C00",
            Self::Obesity => "#E53935",
        }
    }

    pub fn advice(&self) -> Advice {
        match self {
            Self::Normal => Advice {
                kind: AdviceKind::Success,
                message: "Excellent! Keep up this healthy lifestyle.",
            },
            Self::InsufficientWeight => Advice {
                kind: AdviceKind::Info,
                message: "Focus on nutritious food with enough energy to meet your body's needs.",
            },
            Self::Overweight | Self::Obesity => Advice {
                kind: AdviceKind::Warning,
                message: HIGH_RISK_ADVICE,
            },
        }
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::Overweight | Self::Obesity)
    }
}

impl fmt::Display for ObesityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when parsing an unknown level code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown obesity level code '{0}'")]
pub struct UnknownLevelCode(pub String);

impl FromStr for ObesityLevel {
    type Err = UnknownLevelCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IW" => Ok(Self::InsufficientWeight),
            "N" => Ok(Self::Normal),
            "OW" => Ok(Self::Overweight),
            "O" => Ok(Self::Obesity),
            other => Err(UnknownLevelCode(other.to_string())),
        }
    }
}
