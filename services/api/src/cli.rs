use crate::evaluate::{run_evaluate, run_questions, EvaluateArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use decision_notice::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Decision Notice Adjudicator",
    about = "Validate tribunal decisions and select decision-notice scenarios",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a case file and print the selected notice scenario
    Evaluate(EvaluateArgs),
    /// List the scored activity questions for a benefit
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Questions(args) => run_questions(args),
    }
}
