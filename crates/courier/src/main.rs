//! Courier CLI binary.
//!
//! - Run the relay bot
//! - Validate a configuration file

use clap::Parser;
use courier::cli::{Cli, Commands, check_config, load_config, run_bot};
use courier::{LoggingConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before parsing so DISCORD_TOKEN can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut logging = LoggingConfig::new();
    if cli.verbose {
        logging = logging.with_filter("debug");
    }
    if cli.no_color {
        logging = logging.with_ansi(false);
    }
    init_logging(logging)?;

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Run => run_bot(config).await?,
        Commands::Check => println!("{}", check_config(&config)),
    }

    Ok(())
}
