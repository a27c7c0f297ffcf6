//! Raid result data handed to summaries, chat commands, and persistence.

use serde::{Deserialize, Serialize};

use crate::character::Item;
use crate::combat::{BattleResult, Rewards};

/// How a finished raid is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaidOutcome {
    /// Every selected monster was defeated.
    Complete,
    /// The player lost a battle, or was already down when the raid began.
    Defeated,
    /// Left early without losing. No raid currently ends this way; the
    /// variant is kept for a future retreat action.
    Retreated,
}

/// An item lost to the death penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub slot: String,
    pub item: Item,
}

/// Aggregate result of one raid, built battle by battle.
///
/// `monsters_defeated_by` holds at most the one monster that ended the raid.
/// `dropped_items` is only filled in after a death penalty and is omitted
/// from the serialized form when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaidResult {
    pub monsters_defeated: Vec<String>,
    pub monsters_defeated_by: Vec<String>,
    pub total_rewards: Rewards,
    pub battles: Vec<BattleResult>,
    pub raid_complete: bool,
    pub player_survived: bool,
    pub damage_taken: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_items: Vec<DroppedItem>,
}

impl Default for RaidResult {
    fn default() -> Self {
        Self::new()
    }
}

impl RaidResult {
    pub fn new() -> Self {
        Self {
            monsters_defeated: Vec::new(),
            monsters_defeated_by: Vec::new(),
            total_rewards: Rewards::default(),
            battles: Vec::new(),
            raid_complete: false,
            player_survived: true,
            damage_taken: 0,
            dropped_items: Vec::new(),
        }
    }

    pub fn outcome(&self) -> RaidOutcome {
        if self.raid_complete {
            RaidOutcome::Complete
        } else if !self.player_survived || !self.monsters_defeated_by.is_empty() {
            RaidOutcome::Defeated
        } else {
            RaidOutcome::Retreated
        }
    }

    pub(crate) fn record_victory(&mut self, battle: BattleResult) {
        self.monsters_defeated.push(battle.monster_id.clone());
        self.total_rewards += battle.rewards;
        self.battles.push(battle);
    }

    pub(crate) fn record_defeat(&mut self, battle: BattleResult) {
        self.monsters_defeated_by.push(battle.monster_id.clone());
        self.damage_taken += battle.damage_taken as u64;
        self.battles.push(battle);
    }
}
