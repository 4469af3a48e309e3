use crate::demo::{run_appraise, run_demo, AppraiseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_appraisal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Appraisal Engine",
    about = "Serve, batch-run, and demonstrate the loan appraisal engine from the command line",
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
    /// Appraise every row of an exported application CSV
    Appraise(AppraiseArgs),
    /// Appraise the reference applicants and print the results
    Demo(DemoArgs),
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
        Command::Appraise(args) => run_appraise(args),
        Command::Demo(args) => run_demo(args),
    }
}
