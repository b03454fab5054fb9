use arbmatch::cli::output::{self, OutputConfig};
use arbmatch::cli::{check, reconcile, scan, CheckCommand, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    let log_level = cli.log_level.as_deref();

    let result = match &cli.command {
        Commands::Reconcile(args) => reconcile::execute(args, log_level),
        Commands::Scan(args) => scan::execute(args, log_level).await,
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
