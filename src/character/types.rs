use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stats::Stats;
use crate::core::constants::BASE_PLAYER_HP;

/// Slots a freshly created player starts with, all empty.
pub const EQUIPMENT_SLOTS: [&str; 7] = [
    "weapon", "armor", "helmet", "gloves", "boots", "amulet", "ring",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Flat power added to the wearer's score. Absent on records means 0.
    #[serde(default)]
    pub power: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, power: f64) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// Slot name to the item worn there; `None` is an empty slot.
pub type Equipment = BTreeMap<String, Option<Item>>;

/// Player record as loaded from the player store.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so older
/// records keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub equipment: Equipment,
    /// Fractional after a death reset restores 10% of max HP.
    pub current_hp: f64,
    pub max_hp: u32,
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub experience: u64,
    #[serde(default)]
    pub current_party_id: Option<String>,
}

impl Player {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>) -> Self {
        let equipment = EQUIPMENT_SLOTS
            .iter()
            .map(|slot| (slot.to_string(), None))
            .collect();
        Self {
            player_id: player_id.into(),
            name: name.into(),
            level: 1,
            stats: Stats::new(),
            equipment,
            current_hp: BASE_PLAYER_HP as f64,
            max_hp: BASE_PLAYER_HP,
            gold: 0,
            experience: 0,
            current_party_id: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// Puts `item` in `slot`, returning whatever was there before.
    pub fn equip(&mut self, slot: &str, item: Item) -> Option<Item> {
        self.equipment
            .insert(slot.to_string(), Some(item))
            .flatten()
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = (&String, &Item)> {
        self.equipment
            .iter()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.current_hp -= amount;
    }
}
