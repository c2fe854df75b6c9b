//! Starter CLI - scaffold web3 projects from templates

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use starter::util::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands};

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
        EnvFilter::new("starter=debug")
    } else if cli.quiet {
        EnvFilter::new("starter=error")
    } else {
        EnvFilter::new("starter=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    // Execute command
    match cli.command {
        None => commands::new::execute(cli.new, cli.templates, &shell),
        Some(Commands::New(args)) => commands::new::execute(args, cli.templates, &shell),
        Some(Commands::Includes(args)) => commands::includes::execute(args, &shell),
        Some(Commands::Templates) => commands::templates::execute(cli.templates, &shell),
        Some(Commands::Completions(args)) => commands::completions::execute(args, &shell),
    }
}
