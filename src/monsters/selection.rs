use tracing::{debug, warn};

use super::catalog::MonsterCatalog;
use super::types::{Monster, RarityTier};
use crate::core::constants::{MAX_MONSTERS_PER_RAID, MIN_MONSTERS_PER_RAID};
use crate::core::error::{RaidError, Result};
use crate::core::rng::RandomSource;

/// Maps a tower level to the rarity tier whose band contains it.
///
/// Bands are inclusive upper bounds checked in ascending order. Anything
/// past the last band stays in the top tier.
pub fn tier_for_level(tower_level: u32) -> RarityTier {
    RarityTier::all()
        .into_iter()
        .find(|tier| tower_level <= tier.max_level())
        .unwrap_or(RarityTier::S)
}

/// Draws the monsters for one raid at `tower_level`.
///
/// Picks between 3 and 7 distinct templates from the tier's pool (never more
/// than the pool holds) and spawns them in draw order. A pool of one or two
/// templates yields a raid of that size. An empty pool or a failed catalog
/// read fails the whole call.
pub fn select_monsters(
    catalog: &impl MonsterCatalog,
    tower_level: u32,
    rng: &mut impl RandomSource,
) -> Result<Vec<Monster>> {
    let tier = tier_for_level(tower_level);
    let candidates = catalog.find_by_tier(tier)?;

    if candidates.is_empty() {
        return Err(RaidError::NoMonstersForTier(tier));
    }

    let count = if candidates.len() < MIN_MONSTERS_PER_RAID {
        warn!(
            tier = %tier,
            available = candidates.len(),
            "Monster pool smaller than minimum raid size, using all of it"
        );
        candidates.len()
    } else {
        let upper = candidates.len().min(MAX_MONSTERS_PER_RAID);
        rng.int_inclusive(MIN_MONSTERS_PER_RAID, upper)
    };

    let monsters: Vec<Monster> = rng
        .sample_indices(candidates.len(), count)
        .into_iter()
        .map(|i| Monster::from_template(&candidates[i], tier))
        .collect();

    debug!(
        tower_level,
        tier = %tier,
        pool = candidates.len(),
        selected = monsters.len(),
        "Selected raid monsters"
    );

    Ok(monsters)
}
