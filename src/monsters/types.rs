use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// Difficulty band a monster belongs to, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl RarityTier {
    pub fn all() -> [RarityTier; 6] {
        [
            RarityTier::E,
            RarityTier::D,
            RarityTier::C,
            RarityTier::B,
            RarityTier::A,
            RarityTier::S,
        ]
    }

    /// Catalog identifier prefix, e.g. `"B"` for `"B_goblin"`.
    pub fn letter(&self) -> &'static str {
        match self {
            RarityTier::E => "E",
            RarityTier::D => "D",
            RarityTier::C => "C",
            RarityTier::B => "B",
            RarityTier::A => "A",
            RarityTier::S => "S",
        }
    }

    /// Highest progression level that still maps to this tier (inclusive).
    pub fn max_level(&self) -> u32 {
        match self {
            RarityTier::E => 10,
            RarityTier::D => 20,
            RarityTier::C => 30,
            RarityTier::B => 40,
            RarityTier::A => 50,
            RarityTier::S => 60,
        }
    }

    pub fn power_multiplier(&self) -> f64 {
        match self {
            RarityTier::E => 1.0,
            RarityTier::D => 1.3,
            RarityTier::C => 1.6,
            RarityTier::B => 2.0,
            RarityTier::A => 2.5,
            RarityTier::S => 3.0,
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_name: String,
    #[serde(default)]
    pub drop_chance: f64,
}

/// Catalog record. Everything past `level` is optional and falls back to
/// the defaults in `core::constants` when a monster is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub monster_id: String,
    pub name: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_hp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_reward: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold_reward: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loot_table: Option<Vec<LootEntry>>,
}

impl MonsterTemplate {
    pub fn new(monster_id: impl Into<String>, name: impl Into<String>, level: u32) -> Self {
        Self {
            monster_id: monster_id.into(),
            name: name.into(),
            level,
            monster_type: None,
            base_hp: None,
            base_damage: None,
            base_defense: None,
            experience_reward: None,
            gold_reward: None,
            loot_table: None,
        }
    }

    pub fn in_tier(&self, tier: RarityTier) -> bool {
        self.monster_id.starts_with(tier.letter())
    }
}

/// A monster spawned for one raid; discarded when the raid ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub monster_id: String,
    pub name: String,
    pub level: u32,
    pub rarity: RarityTier,
    pub monster_type: String,
    pub hp: u32,
    pub damage: u32,
    pub defense: u32,
    pub experience_reward: u64,
    pub gold_reward: u64,
    pub loot_table: Vec<LootEntry>,
}

impl Monster {
    pub fn from_template(template: &MonsterTemplate, rarity: RarityTier) -> Self {
        Self {
            monster_id: template.monster_id.clone(),
            name: template.name.clone(),
            level: template.level,
            rarity,
            monster_type: template
                .monster_type
                .clone()
                .unwrap_or_else(|| DEFAULT_MONSTER_TYPE.to_string()),
            hp: template.base_hp.unwrap_or(DEFAULT_MONSTER_HP),
            damage: template.base_damage.unwrap_or(DEFAULT_MONSTER_DAMAGE),
            defense: template.base_defense.unwrap_or(DEFAULT_MONSTER_DEFENSE),
            experience_reward: template
                .experience_reward
                .unwrap_or(DEFAULT_MONSTER_XP_REWARD),
            gold_reward: template.gold_reward.unwrap_or(DEFAULT_MONSTER_GOLD_REWARD),
            loot_table: template.loot_table.clone().unwrap_or_default(),
        }
    }
}
