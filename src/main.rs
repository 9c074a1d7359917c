use clap::Parser;
use obesity_predictor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(cli::ServerArgs::default())) {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Api(args) => cli::api::run(args).await,
        Command::Predict(args) => cli::predict::run(args).await,
    }
}
