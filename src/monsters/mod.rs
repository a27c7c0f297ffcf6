//! Monster catalog, spawned monsters, and raid monster selection.

pub mod catalog;
mod data;
pub mod selection;
pub mod types;

pub use catalog::{builtin_catalog, JsonFileCatalog, MemoryCatalog, MonsterCatalog};
pub use data::builtin_templates;
pub use selection::{select_monsters, tier_for_level};
pub use types::*;
