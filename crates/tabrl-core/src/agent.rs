//! Agent lifecycle trait
//!
//! The lifecycle follows the RL-Glue convention: the driver calls
//! `episode_start` after the environment resets, `step` for every action
//! selection, and `episode_end` with the full trajectory once the
//! environment reports a terminal state.

use crate::error::Result;
use crate::trajectory::Trajectory;

/// Trait for episodic agents
pub trait Agent {
    /// Observation type the agent consumes
    type Obs;

    /// Agent name
    fn name(&self) -> &str;

    /// Called once per episode, after the environment's reset.
    ///
    /// Agents that only learn at episode boundaries have nothing to do here;
    /// the default is a no-op.
    fn episode_start(&mut self, _observation: &Self::Obs) {}

    /// Select an action for the current observation.
    ///
    /// `reward` is the reward received for the previous action (0.0 on the
    /// first call of an episode).
    fn step(&mut self, reward: f64, observation: &Self::Obs) -> Result<usize>;

    /// Called when the episode terminates, with the episode's full
    /// trajectory ordered earliest to latest.
    fn episode_end(&mut self, trajectory: &Trajectory<Self::Obs>) -> Result<()>;

    /// Cleanup after the experiment ends
    fn cleanup(&mut self) {}
}
