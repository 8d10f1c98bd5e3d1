//! Train command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tabrl_agents::MonteCarloAgent;
use tabrl_core::Environment;
use tabrl_envs::Blackjack;

use crate::config::TrainConfig;

#[derive(Args)]
pub struct TrainArgs {
    /// Config file with training parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of training episodes
    #[arg(short, long)]
    episodes: Option<u64>,

    /// Seed for the environment and agent RNGs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Discount applied to future rewards
    #[arg(short, long)]
    discount: Option<f64>,

    /// Progress log interval in episodes (0 disables)
    #[arg(long)]
    log_every: Option<u64>,

    /// Snapshot output path (default: <timestamp>_mc_episodes=<n>.json)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub fn run(args: TrainArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => TrainConfig::load(path)?,
        None => TrainConfig::default(),
    };
    if let Some(episodes) = args.episodes {
        config.episodes = episodes;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(discount) = args.discount {
        config.discount_factor = discount;
    }
    if let Some(log_every) = args.log_every {
        config.log_every = log_every;
    }
    if args.out.is_some() {
        config.out = args.out;
    }

    let mut env = Blackjack::new(config.seed);
    let mut agent = MonteCarloAgent::new(
        env.action_space(),
        env.observation_space(),
        config.discount_factor,
        config.seed,
    );

    let report = tabrl_agents::train(&mut env, &mut agent, config.episodes, config.log_every)?;
    info!(
        episodes = report.episodes,
        mean_reward = report.mean_reward,
        "training complete"
    );

    let out = config.out.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_mc_episodes={}.json",
            chrono::Utc::now().timestamp(),
            config.episodes
        ))
    });
    agent
        .save(&out)
        .with_context(|| format!("saving agent snapshot to {}", out.display()))?;

    println!("Trained {} episodes", report.episodes);
    println!("Mean reward: {:.4}", report.mean_reward);
    println!("Snapshot: {}", out.display());
    Ok(())
}
