use crate::analyze::{run_analyze, run_rules, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scamproof::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ScamProof",
    about = "Screen job offers for fraud risk over HTTP or from the command line",
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
    /// Score a single job offer and print the verdict
    Analyze(AnalyzeArgs),
    /// List the active screening rules
    Rules,
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
        Command::Rules => {
            run_rules();
            Ok(())
        }
    }
}
