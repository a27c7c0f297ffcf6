// Player power weights
pub const STRENGTH_POWER_WEIGHT: f64 = 1.5;
pub const AGILITY_POWER_WEIGHT: f64 = 1.2;
pub const VITALITY_POWER_WEIGHT: f64 = 1.0;
pub const PLAYER_LEVEL_POWER_WEIGHT: f64 = 5.0;

// Monster power weights
pub const MONSTER_LEVEL_POWER_WEIGHT: f64 = 6.0;
pub const MONSTER_DAMAGE_POWER_WEIGHT: f64 = 1.3;
pub const MONSTER_DEFENSE_POWER_WEIGHT: f64 = 1.0;

// Mindset: final = base * (1 + m / MINDSET_DIVISOR), m in [0, MINDSET_MAX)
pub const MINDSET_MAX: f64 = 10.0;
pub const MINDSET_DIVISOR: f64 = 20.0;

// Raid size
pub const MIN_MONSTERS_PER_RAID: usize = 3;
pub const MAX_MONSTERS_PER_RAID: usize = 7;

// Monster template defaults for absent catalog fields
pub const DEFAULT_MONSTER_TYPE: &str = "generic";
pub const DEFAULT_MONSTER_HP: u32 = 50;
pub const DEFAULT_MONSTER_DAMAGE: u32 = 5;
pub const DEFAULT_MONSTER_DEFENSE: u32 = 3;
pub const DEFAULT_MONSTER_XP_REWARD: u64 = 15;
pub const DEFAULT_MONSTER_GOLD_REWARD: u64 = 10;

// Death penalties
pub const DEATH_ITEM_DROP_CHANCE: f64 = 0.3;
pub const DEATH_GOLD_LOSS_FRACTION: f64 = 0.2;
pub const DEATH_HP_RESTORE_FRACTION: f64 = 0.1;

// New player defaults
pub const BASE_STAT_VALUE: u32 = 5;
pub const BASE_PLAYER_HP: u32 = 100;
