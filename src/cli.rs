use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mimus Markov-chain tweet generator.
#[derive(Parser)]
#[command(name = "mimus", version, about = "Markov-chain tweet generator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Train on a corpus and generate tweets.
    Generate(GenerateArgs),
    /// Train on a corpus and print the resulting chain.
    Inspect(InspectArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mimus.toml")]
    pub config: PathBuf,

    /// Override corpus path from config.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Override the number of tweets to generate.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Override the tweet character budget.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write tweets to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mimus.toml")]
    pub config: PathBuf,

    /// Override corpus path from config.
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}
