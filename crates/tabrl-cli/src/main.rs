//! tabrl CLI - run tabular RL experiments from the command line
//!
//! Replaces the exploratory notebook workflow: `train` runs the Monte
//! Carlo experiment and writes a snapshot, `evaluate` rolls a saved
//! policy out, `policy show` renders the learned policy tables.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{evaluate, policy, train};

#[derive(Parser)]
#[command(name = "tabrl")]
#[command(author, version, about = "tabrl - tabular RL agents for Blackjack", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the Monte Carlo agent and save a snapshot
    Train(train::TrainArgs),

    /// Evaluate a saved agent snapshot
    Evaluate(evaluate::EvaluateArgs),

    /// Inspect a saved policy
    #[command(subcommand)]
    Policy(policy::PolicyCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("tabrl_cli={log_level},tabrl_agents={log_level}").into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Train(args) => train::run(args),
        Commands::Evaluate(args) => evaluate::run(args),
        Commands::Policy(cmd) => policy::run(cmd),
    }
}
