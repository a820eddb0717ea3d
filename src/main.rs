use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod cli;

use cli::commands::{call_command, config_command, describe_command, endpoints_command, schema_command, validate_command};
use cli::{Cli, Commands};

const LOG_FILE: &str = "msgraph.log";

fn init_logging(verbose: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Stderr);
    } else {
        // Log to file, truncated on each run
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    info!("Starting msgraph {}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Endpoints { filter } => endpoints_command(filter.as_deref()),
        Commands::Describe { alias } => describe_command(&alias),
        Commands::Schema { type_name } => schema_command(&type_name),
        Commands::Validate { type_name, input } => validate_command(&type_name, &input),
        Commands::Call(args) => call_command(args).await,
        Commands::Config(args) => config_command(args),
    };

    if let Err(e) = &result {
        debug!("Command failed: {:?}", e);
    }
    result
}
