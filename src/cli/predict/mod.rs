//! Predict command - classify one set of answers from the command line

use std::fmt::Write as _;

use clap::{Args, ValueEnum};

use super::serve::load_config;
use crate::api::types::PredictionResponse;
use crate::domain::{Answer, Gender, SurveyInput};
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::services::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Survey answers for a single prediction
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Age in years (15-65)
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Recorded only, not used by the model
    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    pub gender: GenderArg,

    /// Weight in kg (30-200)
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Height in meters (1.0-2.5)
    #[arg(long, default_value_t = 1.70)]
    pub height: f64,

    /// Family history of overweight
    #[arg(long)]
    pub family_history: bool,

    /// Frequently eats high-calorie food
    #[arg(long)]
    pub high_calorie_food: bool,

    /// Exercise days per week (0-7)
    #[arg(long, default_value_t = 2)]
    pub exercise_days: u8,

    /// Print the full prediction as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&PredictArgs> for SurveyInput {
    fn from(args: &PredictArgs) -> Self {
        Self {
            age: args.age,
            gender: args.gender.into(),
            weight: args.weight,
            height: args.height,
            family_history: Answer::from(args.family_history),
            high_calorie_food: Answer::from(args.high_calorie_food),
            exercise_days: args.exercise_days,
        }
    }
}

/// Train the model, classify the answers and print the outcome
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging, &config.observability.tracing);

    let state = crate::create_app_state(&config)?;
    let prediction = state
        .prediction_service
        .predict(&SurveyInput::from(&args))
        .await?;

    if args.json {
        let response = PredictionResponse::from(prediction);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", format_report(&prediction));
    }

    Ok(())
}

fn format_report(prediction: &Prediction) -> String {
    let features = &prediction.features;
    let advice = prediction.level.advice();
    let mut report = String::new();

    let _ = writeln!(
        report,
        "Predicted level: {} ({})",
        prediction.level.display_text(),
        prediction.level.code()
    );
    let _ = writeln!(
        report,
        "Encoded input: Age={} Weight={:.1} Height={:.2} FHWO={} FAVC={} FAF={}",
        features.age, features.weight, features.height, features.fhwo, features.favc, features.faf
    );
    let _ = writeln!(report, "Advice: {}", advice.message);

    report
}
