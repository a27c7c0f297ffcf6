//! Raid Balance Simulator
//!
//! Plays seeded raids without the chat bot and reports clear and death rates.
//! Uses the exact same `handle_raid_command()` as real raids.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Simulated players (default: 1000)
//!   --seed N        RNG seed (default: 42)
//!   --tower N       Tower level (default: 1)
//!   --raids N       Raids per player (default: 10)
//!   --level N       Player level (default: 1)
//!   --stat N        Value of every player stat (default: 5)
//!   --gear N        Power of gear in every slot (default: 0)
//!   --catalog FILE  Monster catalog JSON (default: built-in)
//!   --sweep         Run every tier with a level-matched player
//!   --verbose       Per-run output
//!   --quiet         Only one summary line per report

use anyhow::{bail, Context, Result};
use raid::core::logging::init_logging;
use raid::monsters::{builtin_catalog, tier_for_level, JsonFileCatalog, MonsterCatalog, RarityTier};
use raid::raid::RaidManager;
use raid::simulator::{run_simulation, SimConfig};

// ── CLI Configuration ────────────────────────────────────────────────

struct CliConfig {
    sim: SimConfig,
    catalog_path: Option<String>,
    sweep: bool,
    quiet: bool,
}

fn next_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let raw = args
        .get(*i)
        .with_context(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{flag} requires a number, got '{raw}'"))
}

fn parse_args() -> Result<Option<CliConfig>> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig {
        sim: SimConfig {
            seed: Some(42),
            ..Default::default()
        },
        catalog_path: None,
        sweep: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => config.sim.num_runs = next_value(&args, &mut i, "--runs")?,
            "--seed" => config.sim.seed = Some(next_value(&args, &mut i, "--seed")?),
            "--tower" => config.sim.tower_level = next_value(&args, &mut i, "--tower")?,
            "--raids" => config.sim.raids_per_run = next_value(&args, &mut i, "--raids")?,
            "--level" => config.sim.player_level = next_value(&args, &mut i, "--level")?,
            "--stat" => config.sim.stat_value = next_value(&args, &mut i, "--stat")?,
            "--gear" => config.sim.gear_power = next_value(&args, &mut i, "--gear")?,
            "--catalog" => config.catalog_path = Some(next_value(&args, &mut i, "--catalog")?),
            "--sweep" => config.sweep = true,
            "--verbose" => config.sim.verbosity = 2,
            "--quiet" => {
                config.quiet = true;
                config.sim.verbosity = 0;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                print_usage();
                bail!("Unknown argument: {other}");
            }
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!(
        "Raid Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Simulated players (default: 1000)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --tower N       Tower level (default: 1)\n\
         \x20 --raids N       Raids per player (default: 10)\n\
         \x20 --level N       Player level (default: 1)\n\
         \x20 --stat N        Value of every player stat (default: 5)\n\
         \x20 --gear N        Power of gear in every slot (default: 0)\n\
         \x20 --catalog FILE  Monster catalog JSON (default: built-in)\n\
         \x20 --sweep         Run every tier with a level-matched player\n\
         \x20 --verbose       Per-run output\n\
         \x20 --quiet         Only one summary line per report\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() -> Result<()> {
    init_logging("warn");

    let Some(config) = parse_args()? else {
        return Ok(());
    };

    let catalog: Box<dyn MonsterCatalog> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(builtin_catalog()),
    };
    let manager = RaidManager::new(catalog.as_ref());

    let configs: Vec<SimConfig> = if config.sweep {
        RarityTier::all()
            .into_iter()
            .map(|tier| SimConfig {
                num_runs: config.sim.num_runs,
                seed: config.sim.seed,
                raids_per_run: config.sim.raids_per_run,
                verbosity: config.sim.verbosity,
                ..SimConfig::tier_balance_test(tier.max_level())
            })
            .collect()
    } else {
        vec![config.sim.clone()]
    };

    for sim in &configs {
        if !config.quiet {
            eprintln!(
                "Simulating tower {} (tier {}): {} run(s) x {} raid(s), player L{}, seed={:?}",
                sim.tower_level,
                tier_for_level(sim.tower_level),
                sim.num_runs,
                sim.raids_per_run,
                sim.player_level,
                sim.seed
            );
        }

        let report = run_simulation(sim, &manager);

        if config.quiet {
            println!("{}", report.summary_line());
        } else {
            println!("{}", report.to_text());
        }
    }

    Ok(())
}
