use tracing::debug;

use super::power::{power_score, Combatant};
use super::types::{BattleResult, Rewards};
use crate::character::Player;
use crate::core::rng::RandomSource;
use crate::monsters::Monster;

/// Resolves a single fight between `player` and `monster`.
///
/// Rolls the player's score first, then the monster's. The player wins only
/// with a strictly higher score; a tie goes to the monster. Neither side is
/// mutated: applying the damage is up to the caller.
pub fn resolve_battle(
    player: &Player,
    monster: &Monster,
    rng: &mut impl RandomSource,
) -> BattleResult {
    let player_power = power_score(Combatant::Player(player), rng);
    let monster_power = power_score(Combatant::Monster(monster), rng);
    let player_won = player_power > monster_power;

    debug!(
        monster_id = %monster.monster_id,
        player_power,
        monster_power,
        player_won,
        "Battle resolved"
    );

    if player_won {
        BattleResult::victory(
            monster.monster_id.clone(),
            Rewards::new(monster.gold_reward, monster.experience_reward),
        )
    } else {
        BattleResult::defeat(monster.monster_id.clone(), monster.damage)
    }
}
