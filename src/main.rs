use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zipls::cli::Cli;
use zipls::ls;

fn main() -> ExitCode {
    // ZIPLS_LOG takes precedence over RUST_LOG; logs always go to stderr
    let filter = EnvFilter::try_from_env("ZIPLS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Cli::parse().into_config();
    colored::control::set_override(config.format.color);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "zipls:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(config: &zipls::config::Config) -> Result<()> {
    let tree = ls::load_tree(config)?;
    let report = ls::list(config.paths.as_slice(), &tree, config.filter);
    ls::print_report(&report, config)
}
