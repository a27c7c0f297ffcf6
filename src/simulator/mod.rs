//! Raid balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of seeded raids to measure, per tower level:
//! - How often a player of a given strength clears the raid
//! - How often raids end in a death penalty
//! - Average rewards and gear lost
//!
//! Every simulated raid goes through `handle_raid_command`, so results match
//! what real players see.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{build_sim_player, run_simulation};
