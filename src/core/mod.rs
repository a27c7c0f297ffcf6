//! Balance constants, randomness, errors and log setup shared across the crate.

pub mod constants;
pub mod error;
pub mod logging;
pub mod rng;

pub use error::{RaidError, Result};
pub use rng::{RandomSource, SequenceSource};
