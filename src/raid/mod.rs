//! Raids: a run of battles against monsters picked for a tower level.

pub mod command;
pub mod death;
pub mod logic;
pub mod summary;
pub mod types;

pub use command::{handle_raid_command, RaidReport};
pub use death::apply_death;
pub use logic::{run_encounters, RaidManager};
pub use summary::create_raid_summary;
pub use types::*;
