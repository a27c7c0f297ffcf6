//! Power scores: one comparable number per combatant.
//!
//! The base score is deterministic. Every call then rolls a fresh mindset
//! multiplier in `[1.0, 1.5)`, so two scores for the same combatant are
//! independent draws.

use crate::character::{Player, StatType};
use crate::core::constants::*;
use crate::core::rng::RandomSource;
use crate::monsters::Monster;

/// Either side of a battle.
#[derive(Debug, Clone, Copy)]
pub enum Combatant<'a> {
    Player(&'a Player),
    Monster(&'a Monster),
}

/// Stats, level, and the summed `power` of every equipped item.
pub fn player_base_power(player: &Player) -> f64 {
    let stats = &player.stats;
    stats.get(StatType::Strength) as f64 * STRENGTH_POWER_WEIGHT
        + stats.get(StatType::Agility) as f64 * AGILITY_POWER_WEIGHT
        + stats.get(StatType::Vitality) as f64 * VITALITY_POWER_WEIGHT
        + player.level as f64 * PLAYER_LEVEL_POWER_WEIGHT
        + equipment_power(player)
}

pub fn equipment_power(player: &Player) -> f64 {
    player.equipped_items().map(|(_, item)| item.power).sum()
}

/// Level, damage and defense, scaled by the monster's rarity tier.
pub fn monster_base_power(monster: &Monster) -> f64 {
    let raw = monster.level as f64 * MONSTER_LEVEL_POWER_WEIGHT
        + monster.damage as f64 * MONSTER_DAMAGE_POWER_WEIGHT
        + monster.defense as f64 * MONSTER_DEFENSE_POWER_WEIGHT;
    raw * monster.rarity.power_multiplier()
}

pub fn base_power(combatant: Combatant<'_>) -> f64 {
    match combatant {
        Combatant::Player(player) => player_base_power(player),
        Combatant::Monster(monster) => monster_base_power(monster),
    }
}

/// `1 + m / 20` with `m` uniform in `[0, 10)`.
pub fn roll_mindset_multiplier(rng: &mut impl RandomSource) -> f64 {
    let mindset = rng.uniform(0.0, MINDSET_MAX);
    1.0 + mindset / MINDSET_DIVISOR
}

pub fn power_score(combatant: Combatant<'_>, rng: &mut impl RandomSource) -> f64 {
    base_power(combatant) * roll_mindset_multiplier(rng)
}
