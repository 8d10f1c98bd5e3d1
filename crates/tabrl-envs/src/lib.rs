//! tabrl environments
//!
//! Self-contained reimplementations of the two OpenAI Gym environments the
//! agents train against: `Blackjack-v0` and `MountainCar-v0`.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod blackjack;
pub mod mountain_car;

pub use blackjack::{Blackjack, BlackjackObs, HIT, STAY};
pub use mountain_car::{MountainCar, MountainCarObs};
