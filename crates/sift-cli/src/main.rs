//! Sift CLI - Clean, summarize and structure retrieved product reviews.

use anyhow::Context;
use clap::Parser;
use sift_cli::commands;
use sift_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Process(args) => {
            let input = args.input.clone();
            commands::execute_process(args, &formatter)
                .with_context(|| format!("failed to process {}", input.display()))?;
        }
        Command::Clean(args) => commands::execute_clean(args)?,
        Command::Config(args) => commands::execute_config(args)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "sift=debug" } else { "sift=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
