//! Experiment configuration loading

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Training configuration, loadable from a TOML file.
///
/// Command-line flags override whatever the file says.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Number of training episodes
    pub episodes: u64,
    /// Seed shared by the environment and the agent
    pub seed: u64,
    /// Discount applied to future rewards
    pub discount_factor: f64,
    /// Progress log interval in episodes (0 disables progress logs)
    pub log_every: u64,
    /// Snapshot output path; a timestamped name is generated when unset
    pub out: Option<PathBuf>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            episodes: 500_000,
            seed: 2,
            discount_factor: 1.0,
            log_every: 50_000,
            out: None,
        }
    }
}

impl TrainConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
