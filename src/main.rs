//! Raid command runner.
//!
//! Runs one raid for a stored player and prints the raid summary, the way
//! the chat bot's `raid` command does.
//!
//! Usage:
//!   raid --player ID [--tower N] [--data-dir DIR] [--catalog FILE]
//!        [--seed N] [--create NAME] [--json]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use raid::core::logging::init_logging;
use raid::monsters::{builtin_catalog, JsonFileCatalog, MonsterCatalog};
use raid::persistence::{JsonPlayerStore, PlayerStore};
use raid::raid::{handle_raid_command, RaidManager};
use raid::{Player, RaidError};

struct Args {
    player_id: String,
    tower_level: u32,
    data_dir: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    seed: Option<u64>,
    create_name: Option<String>,
    json: bool,
}

fn next_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let raw = args
        .get(*i)
        .with_context(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{flag} got an invalid value '{raw}'"))
}

fn parse_args() -> Result<Option<Args>> {
    let args: Vec<String> = std::env::args().collect();
    let mut player_id: Option<String> = None;
    let mut parsed = Args {
        player_id: String::new(),
        tower_level: 1,
        data_dir: None,
        catalog_path: None,
        seed: None,
        create_name: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--player" => player_id = Some(next_value(&args, &mut i, "--player")?),
            "--tower" => parsed.tower_level = next_value(&args, &mut i, "--tower")?,
            "--data-dir" => parsed.data_dir = Some(next_value(&args, &mut i, "--data-dir")?),
            "--catalog" => parsed.catalog_path = Some(next_value(&args, &mut i, "--catalog")?),
            "--seed" => parsed.seed = Some(next_value(&args, &mut i, "--seed")?),
            "--create" => parsed.create_name = Some(next_value(&args, &mut i, "--create")?),
            "--json" => parsed.json = true,
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

    match player_id {
        Some(id) => parsed.player_id = id,
        None => {
            print_usage();
            bail!("--player is required");
        }
    }
    Ok(Some(parsed))
}

fn print_usage() {
    eprintln!(
        "Raid command runner\n\
         \n\
         Usage: raid --player ID [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --player ID      Player record to raid with (required)\n\
         \x20 --tower N        Tower level (default: 1)\n\
         \x20 --data-dir DIR   Player record directory (default: ~/.raid/players)\n\
         \x20 --catalog FILE   Monster catalog JSON (default: built-in)\n\
         \x20 --seed N         RNG seed (default: random)\n\
         \x20 --create NAME    Create the player with this name if missing\n\
         \x20 --json           Print the full raid report as JSON\n\
         \x20 --help, -h       Show this help"
    );
}

fn main() -> Result<()> {
    init_logging("info");

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let mut store = match &args.data_dir {
        Some(dir) => JsonPlayerStore::new(dir),
        None => JsonPlayerStore::open_default(),
    }
    .context("Failed to open player data directory")?;

    if let Some(name) = &args.create_name {
        match store.load(&args.player_id) {
            Err(RaidError::PlayerNotFound(_)) => {
                store.save(&Player::new(args.player_id.clone(), name.clone()))?;
                tracing::info!(player_id = %args.player_id, "Created new player");
            }
            other => {
                other?;
            }
        }
    }

    let catalog: Box<dyn MonsterCatalog> = match &args.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(builtin_catalog()),
    };
    let manager = RaidManager::new(catalog.as_ref());

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let report = match handle_raid_command(
        &mut store,
        &manager,
        &args.player_id,
        args.tower_level,
        &mut rng,
    ) {
        Ok(report) => report,
        Err(e) if e.is_generation_failure() => {
            bail!(
                "No raid at tower {}: {e} (player {} unchanged)",
                args.tower_level,
                args.player_id
            );
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Raid failed for player {}", args.player_id)));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary);
    }

    Ok(())
}
