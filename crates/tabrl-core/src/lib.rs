//! tabrl core - agent and environment traits plus shared types
//!
//! This crate provides the foundational types used across all tabrl crates:
//! the RL-Glue style agent lifecycle, the environment contract, discrete
//! spaces, and trajectory bookkeeping.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod env;
pub mod error;
pub mod space;
pub mod trajectory;

pub use agent::Agent;
pub use env::{Environment, Step};
pub use error::{Result, TabrlError};
pub use space::Discrete;
pub use trajectory::{Trajectory, Transition};
