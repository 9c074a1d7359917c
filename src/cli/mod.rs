//! CLI module for the Obesity Predictor
//!
//! Provides subcommands for running the predictor in different modes:
//! - `serve`: form page + JSON API (default)
//! - `api`: JSON API only
//! - `predict`: one prediction printed to stdout

pub mod api;
pub mod predict;
pub mod serve;

use clap::{Args, Parser, Subcommand};

/// Obesity Predictor - decision-tree obesity risk assessment
#[derive(Parser)]
#[command(name = "obesity-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the form page and the JSON API (default mode)
    Serve(ServerArgs),

    /// Run the JSON API only
    Api(ServerArgs),

    /// Classify one set of answers and print the result
    Predict(predict::PredictArgs),
}

/// Options shared by the server subcommands
#[derive(Args, Clone, Default)]
pub struct ServerArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}
