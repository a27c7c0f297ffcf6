//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent players to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Tower level every raid is fought at
    pub tower_level: u32,

    /// Consecutive raids per player, carrying HP, gold and deaths between them
    pub raids_per_run: u32,

    /// Level of the simulated player
    pub player_level: u32,

    /// Value given to every stat of the simulated player
    pub stat_value: u32,

    /// Flat power of the gear in each equipment slot (0 = no gear)
    pub gear_power: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            tower_level: 1,
            raids_per_run: 10,
            player_level: 1,
            stat_value: 5,
            gear_power: 0.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking one tier's difficulty with a matching player
    pub fn tier_balance_test(tower_level: u32) -> Self {
        Self {
            num_runs: 200,
            tower_level,
            player_level: tower_level,
            stat_value: 5 + tower_level / 2,
            gear_power: tower_level as f64,
            ..Default::default()
        }
    }
}
