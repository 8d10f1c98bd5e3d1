//! Environment contract

use crate::error::Result;
use crate::space::Discrete;

/// What the environment returns for one step
#[derive(Debug, Clone)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
}

/// Trait for discrete-action simulation environments
pub trait Environment {
    /// Observation type the environment emits
    type Obs;

    /// Start a new episode and return the initial observation
    fn reset(&mut self) -> Self::Obs;

    /// Advance one step. Fails with `InvalidAction` if `action` lies
    /// outside the action space.
    fn step(&mut self, action: usize) -> Result<Step<Self::Obs>>;

    /// Reseed the environment's random number generator
    fn seed(&mut self, seed: u64);

    /// Size of the discrete action space
    fn action_space(&self) -> Discrete;
}
