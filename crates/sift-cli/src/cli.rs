//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sift - Clean, summarize and structure retrieved product reviews.
#[derive(Debug, Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a batch of raw reviews and write the output document
    Process(ProcessArgs),

    /// Print the cleaned form of a piece of text
    Clean(CleanArgs),

    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

/// Endpoint settings shared by commands that build a processor.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EndpointArgs {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ollama base URL (overrides the configuration file)
    #[arg(long, env = "SIFT_OLLAMA_URL")]
    pub endpoint: Option<String>,

    /// Model name (overrides the configuration file)
    #[arg(short, long, env = "SIFT_MODEL")]
    pub model: Option<String>,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// JSON file containing an array of raw records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination of the output document
    #[arg(short, long)]
    pub output: PathBuf,

    /// Only normalize; skip summarization
    #[arg(long)]
    pub no_summarize: bool,

    /// Extract structured fields from each summary
    #[arg(long)]
    pub extract: bool,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Text to clean
    pub text: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,
}
