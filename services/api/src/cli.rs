use crate::report::{run_check, run_extract, run_schemes, CheckArgs, ExtractArgs, SchemesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use welfare_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Welfare Match",
    about = "Score and rank welfare schemes for an applicant profile",
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
    /// Rank the scheme catalog for a single applicant
    Check(CheckArgs),
    /// List the schemes currently open for applications
    Schemes(SchemesArgs),
    /// Pull contact and identity fields out of a recognized document text file
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load schemes from this JSON file instead of APP_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Schemes(args) => run_schemes(args),
        Command::Extract(args) => run_extract(args),
    }
}
