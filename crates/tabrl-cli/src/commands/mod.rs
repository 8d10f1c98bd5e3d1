//! CLI command implementations

pub mod evaluate;
pub mod policy;
pub mod train;
