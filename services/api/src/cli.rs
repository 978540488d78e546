use crate::commands::{run_assess, run_inventory, AssessArgs, InventoryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_auditor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Risk Auditor",
    about = "Classify AI systems under the EU AI Act risk tiers, over HTTP or from the command line",
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
    /// Classify one AI system through the console questionnaire or a JSON request file
    Assess(AssessArgs),
    /// Classify every AI system listed in a CSV inventory
    Inventory(InventoryArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Inventory(args) => run_inventory(args),
    }
}
