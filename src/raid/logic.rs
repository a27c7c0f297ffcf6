//! Raid orchestration: pick monsters, fight them in order, tally results.

use tracing::info;

use super::types::RaidResult;
use crate::character::Player;
use crate::combat::{resolve_battle, BattleResult};
use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::monsters::{select_monsters, Monster, MonsterCatalog};

/// Runs raids against a monster catalog.
#[derive(Debug, Clone)]
pub struct RaidManager<C> {
    catalog: C,
}

impl<C: MonsterCatalog> RaidManager<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Draws the monster lineup for a raid.
    ///
    /// `_player_level` is accepted so callers can pass the whole raid context;
    /// selection currently depends on the tower level alone.
    pub fn generate_monsters(
        &self,
        tower_level: u32,
        _player_level: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<Monster>> {
        select_monsters(&self.catalog, tower_level, rng)
    }

    /// Runs a full raid for `player` at `tower_level`.
    ///
    /// Monster selection happens before anything touches the player, so an
    /// `Err` leaves the player exactly as it was. Death penalties are not
    /// applied here; see [`super::death::apply_death`].
    pub fn process_raid(
        &self,
        player: &mut Player,
        tower_level: u32,
        rng: &mut impl RandomSource,
    ) -> Result<RaidResult> {
        let monsters = self.generate_monsters(tower_level, player.level, rng)?;
        let result = run_encounters(player, &monsters, |p, m| resolve_battle(p, m, &mut *rng));

        info!(
            player_id = %player.player_id,
            tower_level,
            outcome = ?result.outcome(),
            defeated = result.monsters_defeated.len(),
            of = monsters.len(),
            gold = result.total_rewards.gold,
            experience = result.total_rewards.experience,
            "Raid finished"
        );

        Ok(result)
    }
}

/// Fights `monsters` in order using `fight` to settle each battle.
///
/// Before every battle the player's HP is checked: at or below zero the raid
/// ends with `player_survived = false`, even when no battle was lost in this
/// raid (a player entering with 0 HP never fights). A lost battle applies its
/// damage to the player and ends the raid at once, whatever HP remains.
pub fn run_encounters<F>(player: &mut Player, monsters: &[Monster], mut fight: F) -> RaidResult
where
    F: FnMut(&Player, &Monster) -> BattleResult,
{
    let mut result = RaidResult::new();

    for monster in monsters {
        if !player.is_alive() {
            result.player_survived = false;
            break;
        }

        let battle = fight(player, monster);
        if battle.player_won {
            result.record_victory(battle);
        } else {
            player.take_damage(battle.damage_taken as f64);
            result.record_defeat(battle);
            break;
        }
    }

    result.raid_complete = result.monsters_defeated.len() == monsters.len();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Rewards;
    use crate::core::error::RaidError;
    use crate::core::rng::SequenceSource;
    use crate::monsters::{builtin_catalog, MemoryCatalog, MonsterTemplate, RarityTier};
    use crate::raid::RaidOutcome;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lineup(count: usize) -> Vec<Monster> {
        (0..count)
            .map(|i| {
                let template = MonsterTemplate {
                    base_damage: Some(10 + i as u32),
                    gold_reward: Some(5),
                    experience_reward: Some(7),
                    ..MonsterTemplate::new(format!("E_m{}", i), format!("Monster {}", i), 1)
                };
                Monster::from_template(&template, RarityTier::E)
            })
            .collect()
    }

    /// Replays a fixed list of win/loss outcomes.
    fn scripted(outcomes: Vec<bool>) -> impl FnMut(&Player, &Monster) -> BattleResult {
        let mut outcomes = outcomes.into_iter();
        move |_, m| {
            if outcomes.next().unwrap_or(false) {
                BattleResult::victory(m.monster_id.clone(), Rewards::new(m.gold_reward, m.experience_reward))
            } else {
                BattleResult::defeat(m.monster_id.clone(), m.damage)
            }
        }
    }

    #[test]
    fn test_win_win_loss_stops_early() {
        let mut player = Player::new("p", "Tester");
        let monsters = lineup(5);
        let mut fought = Vec::new();
        let mut script = scripted(vec![true, true, false, true, true]);
        let result = run_encounters(&mut player, &monsters, |p, m| {
            fought.push(m.monster_id.clone());
            script(p, m)
        });

        assert_eq!(result.monsters_defeated.len(), 2);
        assert_eq!(result.monsters_defeated_by, vec!["E_m2"]);
        assert!(!result.raid_complete);
        assert_eq!(result.battles.len(), 3);
        assert_eq!(fought, vec!["E_m0", "E_m1", "E_m2"]);
        assert_eq!(result.damage_taken, 12);
        assert_eq!(player.current_hp, 88.0);
        assert_eq!(result.total_rewards, Rewards::new(10, 14));
        // A loss with HP left does not clear the survived flag
        assert!(result.player_survived);
        assert_eq!(result.outcome(), RaidOutcome::Defeated);
    }

    #[test]
    fn test_all_wins_completes_raid() {
        let mut player = Player::new("p", "Tester");
        let monsters = lineup(4);
        let result = run_encounters(&mut player, &monsters, scripted(vec![true; 4]));

        assert!(result.raid_complete);
        assert!(result.player_survived);
        assert_eq!(result.battles.len(), 4);
        assert!(result.monsters_defeated_by.is_empty());
        assert_eq!(result.outcome(), RaidOutcome::Complete);
        assert_eq!(player.current_hp, 100.0);
    }

    #[test]
    fn test_player_at_zero_hp_never_fights() {
        let mut player = Player::new("p", "Tester");
        player.current_hp = 0.0;
        let monsters = lineup(3);
        let mut fights = 0;
        let result = run_encounters(&mut player, &monsters, |_, m| {
            fights += 1;
            BattleResult::victory(m.monster_id.clone(), Rewards::default())
        });

        assert_eq!(fights, 0);
        assert!(!result.player_survived);
        assert!(result.battles.is_empty());
        assert!(!result.raid_complete);
        assert_eq!(result.outcome(), RaidOutcome::Defeated);
    }

    #[test]
    fn test_loss_can_drop_hp_below_zero() {
        let mut player = Player::new("p", "Tester");
        player.current_hp = 5.0;
        let monsters = lineup(3);
        let result = run_encounters(&mut player, &monsters, scripted(vec![false]));
        assert_eq!(player.current_hp, -5.0);
        assert!(result.player_survived);
        assert_eq!(result.monsters_defeated_by.len(), 1);
    }

    #[test]
    fn test_process_raid_strong_player_clears() {
        let manager = RaidManager::new(builtin_catalog());
        let mut player = Player::new("p", "Champion");
        player.level = 1000;
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = manager.process_raid(&mut player, 5, &mut rng).unwrap();
        assert!(result.raid_complete);
        assert!(result.player_survived);
        assert_eq!(result.battles.len(), result.monsters_defeated.len());
        assert!((3..=7).contains(&result.battles.len()));
        assert!(result.monsters_defeated.iter().all(|id| id.starts_with('E')));
    }

    #[test]
    fn test_process_raid_weak_player_loses_first_battle() {
        let manager = RaidManager::new(builtin_catalog());
        let mut player = Player::new("p", "Novice");
        player.stats = Default::default();
        player.level = 0;
        let mut rng = SequenceSource::lowest();

        let result = manager.process_raid(&mut player, 59, &mut rng).unwrap();
        assert_eq!(result.battles.len(), 1);
        assert_eq!(result.monsters_defeated_by.len(), 1);
        assert!(player.current_hp < 100.0);
    }

    #[test]
    fn test_selection_failure_leaves_player_untouched() {
        let manager = RaidManager::new(MemoryCatalog::default());
        let mut player = Player::new("p", "Tester");
        let before = player.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = manager.process_raid(&mut player, 10, &mut rng).unwrap_err();
        assert!(matches!(err, RaidError::NoMonstersForTier(RarityTier::E)));
        assert_eq!(player, before);
    }
}
