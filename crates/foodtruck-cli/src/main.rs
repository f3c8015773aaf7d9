use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let config = commands::load_config(&cli)?;
    init_tracing(cli.verbose, &config.log.level);

    let mut stdout = std::io::stdout().lock();
    match commands::run_command(cli, &config, &mut stdout)? {
        commands::Status::Success => Ok(ExitCode::SUCCESS),
        commands::Status::NotFound => Ok(ExitCode::FAILURE),
    }
}

// RUST_LOG wins over the config file; --verbose wins over both.
fn init_tracing(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
