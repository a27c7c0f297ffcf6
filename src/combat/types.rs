use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    pub gold: u64,
    pub experience: u64,
}

impl Rewards {
    pub fn new(gold: u64, experience: u64) -> Self {
        Self { gold, experience }
    }

    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.experience == 0
    }
}

impl AddAssign for Rewards {
    fn add_assign(&mut self, other: Rewards) {
        self.gold += other.gold;
        self.experience += other.experience;
    }
}

/// Outcome of one player-versus-monster fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub player_won: bool,
    pub damage_taken: u32,
    pub rewards: Rewards,
    pub monster_id: String,
}

impl BattleResult {
    pub fn victory(monster_id: impl Into<String>, rewards: Rewards) -> Self {
        Self {
            player_won: true,
            damage_taken: 0,
            rewards,
            monster_id: monster_id.into(),
        }
    }

    pub fn defeat(monster_id: impl Into<String>, damage_taken: u32) -> Self {
        Self {
            player_won: false,
            damage_taken,
            rewards: Rewards::default(),
            monster_id: monster_id.into(),
        }
    }
}
