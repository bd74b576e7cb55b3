use crate::assess::{run_assess, run_demo, run_domains, AssessArgs, DemoArgs};
use crate::server;
use capability_diagnostic::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Capability Diagnostic",
    about = "Surface capability gaps and risk signals from an AI capability self-assessment",
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
    /// Evaluate a submission from a JSON file or a score sheet CSV
    Assess(AssessArgs),
    /// Evaluate a built-in sample submission
    Demo(DemoArgs),
    /// List the capability domains and the scoring scale
    Domains,
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
        Command::Demo(args) => run_demo(args),
        Command::Domains => {
            run_domains();
            Ok(())
        }
    }
}
