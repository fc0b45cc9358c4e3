//! wlidctl - CLI for workload identifiers
//!
//! Encodes, decodes, and validates WLIDs, and derives them from
//! Kubernetes manifests.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    logging::init(&config.log_level, cli.log_json());

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
