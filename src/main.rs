//! hostsgen - build a hosts file from remote blocklists.

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hostsgen::cli::{Cli, Operation};
use hostsgen::commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let Some(operation) = cli.operation() else {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    let config = cli.config.as_deref();
    let cache_dir = cli.cache_dir.as_deref();
    let timeout = Duration::from_secs(cli.timeout);

    let result = match operation {
        Operation::Refresh => commands::refresh::run(config, cache_dir, timeout)
            .await
            .map(drop),
        Operation::Copy => commands::copy::run(cache_dir, &cli.hosts_file).await,
        Operation::Update => {
            commands::update::run(config, cache_dir, &cli.hosts_file, timeout).await
        }
        Operation::Allow(url) => commands::allow::run(&url, &cli.hosts_file).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
