//! Power scores and single-battle resolution.

pub mod logic;
pub mod power;
pub mod types;

pub use logic::*;
pub use power::*;
pub use types::*;
