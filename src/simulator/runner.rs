//! Main simulation runner driving the real raid pipeline.
//!
//! Each run creates a fresh player and plays `raids_per_run` raids in a row
//! through `handle_raid_command`, so rewards, HP carry-over and death
//! penalties behave exactly as they do for real players.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::{Item, Player, StatType, EQUIPMENT_SLOTS};
use crate::monsters::MonsterCatalog;
use crate::persistence::{MemoryPlayerStore, PlayerStore};
use crate::raid::{handle_raid_command, RaidManager, RaidOutcome};

const SIM_PLAYER_ID: &str = "sim-player";

/// Run the full simulation and return a report.
pub fn run_simulation<C: MonsterCatalog>(config: &SimConfig, manager: &RaidManager<C>) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, manager, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Raids {}, Clears {}, Defeats {}, Deaths {}, Gold {}, XP {}",
                run_idx + 1,
                config.num_runs,
                run_stats.raids_attempted,
                run_stats.raids_cleared,
                run_stats.raids_defeated,
                run_stats.deaths,
                run_stats.final_gold,
                run_stats.final_experience
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.tower_level)
}

/// Builds the simulated player described by `config`.
pub fn build_sim_player(config: &SimConfig) -> Player {
    let mut player = Player::new(SIM_PLAYER_ID, "SimPlayer");
    player.level = config.player_level;
    for stat in StatType::all() {
        player.stats.set(stat, config.stat_value);
    }
    if config.gear_power > 0.0 {
        for slot in EQUIPMENT_SLOTS {
            player.equip(slot, Item::new(format!("Sim {}", slot), config.gear_power));
        }
    }
    player
}

fn simulate_single_run<C: MonsterCatalog>(
    config: &SimConfig,
    manager: &RaidManager<C>,
    rng: &mut ChaCha8Rng,
) -> RunStats {
    let mut store = MemoryPlayerStore::new().with_player(build_sim_player(config));
    let mut stats = RunStats::default();

    for _ in 0..config.raids_per_run {
        let report = match handle_raid_command(
            &mut store,
            manager,
            SIM_PLAYER_ID,
            config.tower_level,
            rng,
        ) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Simulated raid failed, ending run");
                stats.failed_raids += 1;
                break;
            }
        };

        let result = &report.result;
        stats.raids_attempted += 1;
        stats.battles_fought += result.battles.len() as u64;
        stats.monsters_defeated += result.monsters_defeated.len() as u64;
        stats.damage_taken += result.damage_taken;
        stats.items_lost += result.dropped_items.len() as u64;

        match result.outcome() {
            RaidOutcome::Complete => stats.raids_cleared += 1,
            RaidOutcome::Defeated => stats.raids_defeated += 1,
            RaidOutcome::Retreated => stats.raids_retreated += 1,
        }
        if !result.player_survived {
            stats.deaths += 1;
        }
    }

    if let Ok(player) = store.load(SIM_PLAYER_ID) {
        stats.final_gold = player.gold;
        stats.final_experience = player.experience;
    }

    stats
}
