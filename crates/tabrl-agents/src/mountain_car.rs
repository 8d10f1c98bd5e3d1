//! Mountain Car agent
//!
//! Placeholder: drives the lifecycle against the Mountain Car environment
//! but does not learn yet.
//! TODO: tile-code the (position, velocity) observation and learn with SARSA

use tabrl_core::{Agent, Result, Trajectory};
use tabrl_envs::mountain_car::MountainCarObs;

/// No push, the middle of the three actions
const COAST: usize = 1;

#[derive(Debug, Default)]
pub struct MountainCarAgent;

impl MountainCarAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for MountainCarAgent {
    type Obs = MountainCarObs;

    fn name(&self) -> &str {
        "mountain_car"
    }

    fn step(&mut self, _reward: f64, _observation: &MountainCarObs) -> Result<usize> {
        Ok(COAST)
    }

    fn episode_end(&mut self, _trajectory: &Trajectory<MountainCarObs>) -> Result<()> {
        Ok(())
    }
}
