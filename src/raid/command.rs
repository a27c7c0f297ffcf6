//! The `raid` chat command: run a raid for a stored player and save the outcome.

use serde::Serialize;
use tracing::info;

use super::death::apply_death;
use super::logic::RaidManager;
use super::summary::create_raid_summary;
use super::types::RaidResult;
use crate::character::Player;
use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::monsters::MonsterCatalog;
use crate::persistence::PlayerStore;

/// What the command hands back to the chat layer.
#[derive(Debug, Clone, Serialize)]
pub struct RaidReport {
    pub player: Player,
    pub result: RaidResult,
    pub summary: String,
}

/// Loads `player_id`, runs a raid at `tower_level`, pays out rewards,
/// applies the death penalty when the player did not survive, and persists
/// the player.
///
/// Rewards from battles won before a loss are kept. A failed monster
/// selection returns early with nothing written.
pub fn handle_raid_command<S, C>(
    store: &mut S,
    manager: &RaidManager<C>,
    player_id: &str,
    tower_level: u32,
    rng: &mut impl RandomSource,
) -> Result<RaidReport>
where
    S: PlayerStore,
    C: MonsterCatalog,
{
    let mut player = store.load(player_id)?;
    let mut result = manager.process_raid(&mut player, tower_level, rng)?;

    player.gold += result.total_rewards.gold;
    player.experience += result.total_rewards.experience;

    if result.player_survived {
        store.save_progress(&player)?;
    } else {
        result.dropped_items = apply_death(&mut player, rng);
        // Equipment and party changed too, so write the whole record
        store.save(&player)?;
        info!(player_id, tower_level, "Player died in raid");
    }

    let summary = create_raid_summary(&result);
    Ok(RaidReport {
        player,
        result,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Item;
    use crate::core::error::RaidError;
    use crate::core::rng::SequenceSource;
    use crate::monsters::{builtin_catalog, MemoryCatalog};
    use crate::persistence::MemoryPlayerStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_successful_raid_pays_out_and_saves() {
        let mut hero = Player::new("hero", "Hero");
        hero.level = 500;
        hero.gold = 10;
        let mut store = MemoryPlayerStore::new().with_player(hero);
        let manager = RaidManager::new(builtin_catalog());
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let report = handle_raid_command(&mut store, &manager, "hero", 3, &mut rng).unwrap();
        assert!(report.result.raid_complete);
        let saved = store.get("hero").unwrap();
        assert_eq!(saved.gold, 10 + report.result.total_rewards.gold);
        assert_eq!(saved.experience, report.result.total_rewards.experience);
        assert!(report.summary.contains("Raid Complete"));
        assert!(report.result.dropped_items.is_empty());
    }

    #[test]
    fn test_downed_player_gets_death_penalty() {
        let mut downed = Player::new("downed", "Downed");
        downed.current_hp = 0.0;
        downed.gold = 100;
        downed.max_hp = 80;
        downed.current_party_id = Some("party".to_string());
        downed.equip("weapon", Item::new("Axe", 8.0));
        let mut store = MemoryPlayerStore::new().with_player(downed);
        let manager = RaidManager::new(builtin_catalog());
        // Every draw at 0.0: three monsters, and every equipped item drops
        let mut rng = SequenceSource::lowest();

        let report = handle_raid_command(&mut store, &manager, "downed", 1, &mut rng).unwrap();
        assert!(!report.result.player_survived);
        assert!(report.result.battles.is_empty());
        assert_eq!(report.result.dropped_items.len(), 1);

        let saved = store.get("downed").unwrap();
        assert_eq!(saved.gold, 80);
        assert_eq!(saved.current_hp, 80.0 * 0.1);
        assert!(saved.current_party_id.is_none());
        assert!(saved.equipment["weapon"].is_none());
        assert!(report.summary.contains("Raid Failed"));
        assert!(report.summary.contains("Axe (weapon)"));
    }

    #[test]
    fn test_loss_with_hp_left_skips_death_penalty() {
        let mut weak = Player::new("weak", "Weak");
        weak.stats = Default::default();
        weak.level = 0;
        weak.gold = 50;
        weak.equip("weapon", Item::new("Twig", 0.0));
        let mut store = MemoryPlayerStore::new().with_player(weak);
        let manager = RaidManager::new(builtin_catalog());
        let mut rng = SequenceSource::lowest();

        let report = handle_raid_command(&mut store, &manager, "weak", 1, &mut rng).unwrap();
        assert_eq!(report.result.monsters_defeated_by.len(), 1);
        assert!(report.result.player_survived);

        let saved = store.get("weak").unwrap();
        assert_eq!(saved.gold, 50);
        assert!(saved.current_hp < 100.0);
        assert!(saved.equipment["weapon"].is_some());
        assert!(report.summary.ends_with("Raid Abandoned - Retreated safely"));
    }

    #[test]
    fn test_unknown_player() {
        let mut store = MemoryPlayerStore::new();
        let manager = RaidManager::new(builtin_catalog());
        let err = handle_raid_command(&mut store, &manager, "nobody", 1, &mut SequenceSource::lowest())
            .unwrap_err();
        assert!(matches!(err, RaidError::PlayerNotFound(_)));
    }

    #[test]
    fn test_generation_failure_writes_nothing() {
        let mut player = Player::new("p", "Tester");
        player.gold = 33;
        let mut store = MemoryPlayerStore::new().with_player(player.clone());
        let manager = RaidManager::new(MemoryCatalog::default());

        let err = handle_raid_command(&mut store, &manager, "p", 1, &mut SequenceSource::lowest())
            .unwrap_err();
        assert!(err.is_generation_failure());
        assert_eq!(store.get("p"), Some(&player));
    }
}
