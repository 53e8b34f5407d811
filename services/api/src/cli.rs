use crate::demo::{run_analyze, run_demo, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use trust_aware::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Trust-Aware Decision Service",
    about = "Classify text and decide whether the prediction is safe to automate",
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
    /// Analyze a single text and print the decision with its explanation
    Analyze(AnalyzeArgs),
    /// Run the reference scenarios through the full pipeline
    Demo,
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
        Command::Analyze(args) => run_analyze(args),
        Command::Demo => run_demo(),
    }
}
