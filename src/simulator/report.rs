//! Simulation report generation.

/// Tallies for one simulated player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub raids_attempted: u32,
    pub raids_cleared: u32,
    pub raids_defeated: u32,
    pub raids_retreated: u32,
    pub failed_raids: u32,
    pub deaths: u32,
    pub battles_fought: u64,
    pub monsters_defeated: u64,
    pub damage_taken: u64,
    pub items_lost: u64,
    pub final_gold: u64,
    pub final_experience: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub tower_level: u32,
    pub total_raids: u64,
    pub total_deaths: u64,

    // Rates over all raids
    pub clear_rate: f64,
    pub defeat_rate: f64,
    pub death_rate: f64,

    // Per-raid averages
    pub avg_monsters_defeated: f64,
    pub avg_damage_taken: f64,

    // Per-run averages
    pub avg_final_gold: f64,
    pub avg_final_experience: f64,
    pub avg_items_lost: f64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, tower_level: u32) -> Self {
        let num_runs = runs.len() as u32;
        let total_raids: u64 = runs.iter().map(|r| r.raids_attempted as u64).sum();
        let total_cleared: u64 = runs.iter().map(|r| r.raids_cleared as u64).sum();
        let total_defeated: u64 = runs.iter().map(|r| r.raids_defeated as u64).sum();
        let total_deaths: u64 = runs.iter().map(|r| r.deaths as u64).sum();
        let total_monsters: u64 = runs.iter().map(|r| r.monsters_defeated).sum();
        let total_damage: u64 = runs.iter().map(|r| r.damage_taken).sum();

        let per_raid = |n: u64| n as f64 / total_raids.max(1) as f64;
        let per_run = |n: u64| n as f64 / num_runs.max(1) as f64;

        Self {
            num_runs,
            tower_level,
            total_raids,
            total_deaths,
            clear_rate: per_raid(total_cleared),
            defeat_rate: per_raid(total_defeated),
            death_rate: per_raid(total_deaths),
            avg_monsters_defeated: per_raid(total_monsters),
            avg_damage_taken: per_raid(total_damage),
            avg_final_gold: per_run(runs.iter().map(|r| r.final_gold).sum()),
            avg_final_experience: per_run(runs.iter().map(|r| r.final_experience).sum()),
            avg_items_lost: per_run(runs.iter().map(|r| r.items_lost).sum()),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    RAID SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, Raids: {}, Tower Level: {}\n\n",
            self.num_runs, self.total_raids, self.tower_level
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Clear Rate:          {:>5.1}% {}\n",
            self.clear_rate * 100.0,
            bar(self.clear_rate)
        ));
        report.push_str(&format!(
            "  Defeat Rate:         {:>5.1}% {}\n",
            self.defeat_rate * 100.0,
            bar(self.defeat_rate)
        ));
        report.push_str(&format!(
            "  Death Rate:          {:>5.1}% {}\n\n",
            self.death_rate * 100.0,
            bar(self.death_rate)
        ));

        report.push_str("── PER RAID ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Monsters Slain:  {:.2}\n",
            self.avg_monsters_defeated
        ));
        report.push_str(&format!(
            "  Avg Damage Taken:    {:.1}\n\n",
            self.avg_damage_taken
        ));

        report.push_str("── PER PLAYER ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n", self.avg_final_gold));
        report.push_str(&format!(
            "  Avg Final XP:        {:.0}\n",
            self.avg_final_experience
        ));
        report.push_str(&format!("  Avg Items Lost:      {:.2}\n", self.avg_items_lost));

        report
    }

    /// One-line summary for quiet mode.
    pub fn summary_line(&self) -> String {
        format!(
            "tower={} runs={} raids={} clear={:.1}% death={:.1}% gold={:.0} xp={:.0}",
            self.tower_level,
            self.num_runs,
            self.total_raids,
            self.clear_rate * 100.0,
            self.death_rate * 100.0,
            self.avg_final_gold,
            self.avg_final_experience
        )
    }
}

fn bar(rate: f64) -> String {
    "█".repeat((rate * 20.0) as usize)
}
