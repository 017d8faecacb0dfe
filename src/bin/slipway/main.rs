//! Slipway CLI - a build-environment bootstrapper for native C++ SDKs

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use slipway::util::shell::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let shell = Arc::new(Shell::from_flags(cli.quiet, cli.verbose, cli.color));

    // Execute command
    match cli.command {
        Commands::Setup(args) => commands::setup::execute(args, &shell),
        Commands::Deps(args) => commands::deps::execute(args, &shell),
        Commands::Generate(args) => commands::generate::execute(args, &shell),
        Commands::Profile => commands::profile::execute(&shell),
        Commands::Doctor(args) => commands::doctor::execute(args, cli.verbose),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
