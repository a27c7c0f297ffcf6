use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::constants::BASE_STAT_VALUE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatType {
    Strength,
    Agility,
    Vitality,
    Intelligence,
    Luck,
}

impl StatType {
    pub fn all() -> [StatType; 5] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Vitality,
            StatType::Intelligence,
            StatType::Luck,
        ]
    }

    /// Key used in the stored stat map.
    pub fn key(&self) -> &'static str {
        match self {
            StatType::Strength => "strength",
            StatType::Agility => "agility",
            StatType::Vitality => "vitality",
            StatType::Intelligence => "intelligence",
            StatType::Luck => "luck",
        }
    }
}

/// Named stat values as stored on the player record.
///
/// Records written by other tools may be missing keys or carry extra ones,
/// so lookups never fail: an absent stat reads as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Stats {
    values: BTreeMap<String, u32>,
}

impl Stats {
    /// Every known stat at the starting value.
    pub fn new() -> Self {
        let mut stats = Self::default();
        for stat in StatType::all() {
            stats.set(stat, BASE_STAT_VALUE);
        }
        stats
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.get_raw(stat.key())
    }

    pub fn get_raw(&self, key: &str) -> u32 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values.insert(stat.key().to_string(), value);
    }

    pub fn with(mut self, stat: StatType, value: u32) -> Self {
        self.set(stat, value);
        self
    }
}
