//! Raid - Tower Raid Resolution for a Text RPG
//!
//! A player fights a run of monsters drawn for a tower level; power scores
//! decide each battle, and losing can cost gear, gold and HP. This library
//! holds the raid engine; the chat bot and storage live outside it.

pub mod character;
pub mod combat;
pub mod core;
pub mod monsters;
pub mod persistence;
pub mod raid;
pub mod simulator;

pub use character::{Item, Player};
pub use crate::core::{RaidError, RandomSource, Result};
pub use monsters::{Monster, MonsterCatalog, RarityTier};
pub use raid::{RaidManager, RaidResult};
