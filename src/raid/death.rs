use tracing::info;

use super::types::DroppedItem;
use crate::character::Player;
use crate::core::constants::{
    DEATH_GOLD_LOSS_FRACTION, DEATH_HP_RESTORE_FRACTION, DEATH_ITEM_DROP_CHANCE,
};
use crate::core::rng::RandomSource;

/// Applies the death penalty and sends the player back to camp.
///
/// Each occupied slot independently loses its item with 30% chance, 20% of
/// gold is lost (rounded down), HP is set to 10% of max (fractions kept),
/// and the player leaves any party. Returns the dropped items in slot order.
pub fn apply_death(player: &mut Player, rng: &mut impl RandomSource) -> Vec<DroppedItem> {
    let mut dropped = Vec::new();

    for (slot, equipped) in player.equipment.iter_mut() {
        if equipped.is_some() && rng.chance(DEATH_ITEM_DROP_CHANCE) {
            if let Some(item) = equipped.take() {
                dropped.push(DroppedItem {
                    slot: slot.clone(),
                    item,
                });
            }
        }
    }

    let gold_loss = (player.gold as f64 * DEATH_GOLD_LOSS_FRACTION) as u64;
    player.gold -= gold_loss;

    player.current_hp = player.max_hp as f64 * DEATH_HP_RESTORE_FRACTION;
    player.current_party_id = None;

    info!(
        player_id = %player.player_id,
        items_dropped = dropped.len(),
        gold_loss,
        "Death penalty applied"
    );

    dropped
}
