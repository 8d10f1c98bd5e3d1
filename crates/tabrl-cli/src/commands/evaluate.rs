//! Evaluate command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tabrl_agents::MonteCarloAgent;
use tabrl_envs::Blackjack;

#[derive(Args)]
pub struct EvaluateArgs {
    /// Path to a saved agent snapshot
    #[arg(short, long)]
    agent: PathBuf,

    /// Number of evaluation episodes
    #[arg(short, long, default_value = "10000")]
    episodes: u64,

    /// Seed for the evaluation environment
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let mut agent = MonteCarloAgent::load(&args.agent)
        .with_context(|| format!("loading agent snapshot from {}", args.agent.display()))?;
    let mut env = Blackjack::new(args.seed);

    let report = tabrl_agents::evaluate(&mut env, &mut agent, args.episodes)?;

    println!("Episodes: {}", report.episodes);
    println!(
        "Wins: {} ({:.1}%)",
        report.wins,
        100.0 * report.wins as f64 / report.episodes as f64
    );
    println!(
        "Draws: {} ({:.1}%)",
        report.draws,
        100.0 * report.draws as f64 / report.episodes as f64
    );
    println!(
        "Losses: {} ({:.1}%)",
        report.losses,
        100.0 * report.losses as f64 / report.episodes as f64
    );
    println!("Mean reward: {:.4}", report.mean_reward);
    Ok(())
}
