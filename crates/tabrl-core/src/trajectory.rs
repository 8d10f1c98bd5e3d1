//! Trajectory bookkeeping for episodic agents

use serde::{Deserialize, Serialize};

/// A single (action, observation, reward) triple.
///
/// `observation` is the state the environment returned after `action` was
/// taken, and `reward` is the reward it returned for taking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition<O> {
    pub action: usize,
    pub observation: O,
    pub reward: f64,
}

impl<O> Transition<O> {
    pub fn new(action: usize, observation: O, reward: f64) -> Self {
        Self {
            action,
            observation,
            reward,
        }
    }
}

/// One episode's transitions, ordered earliest to latest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<O> {
    transitions: Vec<Transition<O>>,
}

impl<O> Trajectory<O> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition at the end of the trajectory
    pub fn push(&mut self, transition: Transition<O>) {
        self.transitions.push(transition);
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Iterate earliest to latest
    pub fn iter(&self) -> std::slice::Iter<'_, Transition<O>> {
        self.transitions.iter()
    }

    /// Iterate latest to earliest, the order Monte Carlo updates consume
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, Transition<O>>> {
        self.transitions.iter().rev()
    }

    /// Sum of undiscounted rewards over the episode
    pub fn total_reward(&self) -> f64 {
        self.transitions.iter().map(|t| t.reward).sum()
    }
}

impl<O> Default for Trajectory<O> {
    fn default() -> Self {
        Self::new()
    }
}
