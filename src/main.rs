// Main entry point for vendor-test-suite

use anyhow::Result;
use clap::Parser;
use tracing::info;

use vendor_test_suite::cli::Cli;
use vendor_test_suite::commands;
use vendor_test_suite::config::Config;
use vendor_test_suite::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.verbose {
        info!("Starting vendor-test-suite v{}", env!("CARGO_PKG_VERSION"));
    }

    // Load configuration from file (if exists)
    let config = Config::load();

    if cli.config {
        return commands::show_config(&cli, config.as_ref());
    }

    if let Some(config_file) = &cli.init_config {
        return commands::init_config(config_file);
    }

    if let Some(shell_type) = &cli.completion {
        return commands::handle_completion(shell_type);
    }

    commands::run_suite(&cli, &config.unwrap_or_default())
}
