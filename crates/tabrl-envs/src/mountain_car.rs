//! Mountain Car environment
//!
//! Classic control task from Gym's `MountainCar-v0`: an underpowered car
//! must rock back and forth in a valley to reach the flag on the right
//! hill. Three actions (push left, no push, push right), reward -1 per
//! step, episode capped at 200 steps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use tabrl_core::{Discrete, Environment, Result, Step, TabrlError};

const MIN_POSITION: f64 = -1.2;
const MAX_POSITION: f64 = 0.6;
const MAX_SPEED: f64 = 0.07;
const GOAL_POSITION: f64 = 0.5;
const FORCE: f64 = 0.001;
const GRAVITY: f64 = 0.0025;
const MAX_EPISODE_STEPS: u32 = 200;

/// Observation: the car's position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainCarObs {
    pub position: f64,
    pub velocity: f64,
}

pub struct MountainCar {
    rng: StdRng,
    position: f64,
    velocity: f64,
    steps: u32,
    in_episode: bool,
}

impl MountainCar {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            position: 0.0,
            velocity: 0.0,
            steps: 0,
            in_episode: false,
        }
    }

    fn observe(&self) -> MountainCarObs {
        MountainCarObs {
            position: self.position,
            velocity: self.velocity,
        }
    }
}

impl Environment for MountainCar {
    type Obs = MountainCarObs;

    fn reset(&mut self) -> MountainCarObs {
        self.position = self.rng.gen_range(-0.6..-0.4);
        self.velocity = 0.0;
        self.steps = 0;
        self.in_episode = true;
        self.observe()
    }

    fn step(&mut self, action: usize) -> Result<Step<MountainCarObs>> {
        if !self.in_episode {
            return Err(TabrlError::Env(
                "step called on a finished episode; call reset first".to_string(),
            ));
        }
        let space = self.action_space();
        if !space.contains(action) {
            return Err(TabrlError::InvalidAction {
                action,
                space: space.n,
            });
        }

        self.velocity += (action as f64 - 1.0) * FORCE + (3.0 * self.position).cos() * -GRAVITY;
        self.velocity = self.velocity.clamp(-MAX_SPEED, MAX_SPEED);
        self.position += self.velocity;
        self.position = self.position.clamp(MIN_POSITION, MAX_POSITION);
        if self.position <= MIN_POSITION && self.velocity < 0.0 {
            self.velocity = 0.0;
        }
        self.steps += 1;

        let done = self.position >= GOAL_POSITION || self.steps >= MAX_EPISODE_STEPS;
        if done {
            self.in_episode = false;
        }
        Ok(Step {
            observation: self.observe(),
            reward: -1.0,
            done,
        })
    }

    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(3)
    }
}
