//! tabrl agents
//!
//! This crate provides the tabular agents and the episode runner that
//! drives them against an environment: every-visit Monte Carlo control for
//! Blackjack, and a placeholder Mountain Car agent.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

pub mod monte_carlo;
pub mod mountain_car;
pub mod runner;

pub use monte_carlo::MonteCarloAgent;
pub use mountain_car::MountainCarAgent;
pub use runner::{evaluate, run_episode, train, EvalReport, TrainReport};
