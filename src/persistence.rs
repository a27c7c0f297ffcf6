//! Player record storage keyed by player id.
//!
//! Raids only need to load a player and write back the fields a raid
//! changes. `JsonPlayerStore` keeps one pretty-printed JSON file per player
//! under `~/.raid/players/`; `MemoryPlayerStore` backs tests and the simulator.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::character::Player;
use crate::core::error::{RaidError, Result};

pub trait PlayerStore {
    fn load(&self, player_id: &str) -> Result<Player>;

    /// Writes the whole record, creating it if needed.
    fn save(&mut self, player: &Player) -> Result<()>;

    /// Writes back only `current_hp`, `gold` and `experience` onto the
    /// stored record, leaving every other field as stored.
    fn save_progress(&mut self, player: &Player) -> Result<()> {
        let mut stored = self.load(&player.player_id)?;
        stored.current_hp = player.current_hp;
        stored.gold = player.gold;
        stored.experience = player.experience;
        self.save(&stored)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPlayerStore {
    players: HashMap<String, Player>,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.insert(player.player_id.clone(), player);
        self
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }
}

impl PlayerStore for MemoryPlayerStore {
    fn load(&self, player_id: &str) -> Result<Player> {
        self.players
            .get(player_id)
            .cloned()
            .ok_or_else(|| RaidError::PlayerNotFound(player_id.to_string()))
    }

    fn save(&mut self, player: &Player) -> Result<()> {
        self.players
            .insert(player.player_id.clone(), player.clone());
        Ok(())
    }
}

/// Get the default ~/.raid/players/ directory path, creating it if needed.
pub fn default_data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".raid").join("players");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[derive(Debug, Clone)]
pub struct JsonPlayerStore {
    dir: PathBuf,
}

impl JsonPlayerStore {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn open_default() -> io::Result<Self> {
        Self::new(default_data_dir()?)
    }

    /// File name for a player id. Anything outside `[A-Za-z0-9_-]` becomes `_`
    /// so ids can never escape the data directory.
    fn path_for(&self, player_id: &str) -> PathBuf {
        let safe: String = player_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl PlayerStore for JsonPlayerStore {
    fn load(&self, player_id: &str) -> Result<Player> {
        let path = self.path_for(player_id);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RaidError::PlayerNotFound(player_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&mut self, player: &Player) -> Result<()> {
        let json = serde_json::to_string_pretty(player)?;
        fs::write(self.path_for(&player.player_id), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Item;

    #[test]
    fn test_memory_store_missing_player() {
        let store = MemoryPlayerStore::new();
        assert!(matches!(
            store.load("ghost"),
            Err(RaidError::PlayerNotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_save_progress_only_touches_raid_fields() {
        let mut stored = Player::new("p1", "Aria");
        stored.equip("weapon", Item::new("Sword", 5.0));
        let mut store = MemoryPlayerStore::new().with_player(stored);

        let mut changed = store.load("p1").unwrap();
        changed.gold = 99;
        changed.experience = 40;
        changed.current_hp = 12.5;
        changed.name = "Renamed".to_string();
        changed.equipment.insert("weapon".to_string(), None);
        store.save_progress(&changed).unwrap();

        let reloaded = store.get("p1").unwrap();
        assert_eq!(reloaded.gold, 99);
        assert_eq!(reloaded.experience, 40);
        assert_eq!(reloaded.current_hp, 12.5);
        assert_eq!(reloaded.name, "Aria");
        assert!(reloaded.equipment["weapon"].is_some());
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonPlayerStore::new(dir.path()).unwrap();
        let mut player = Player::new("1234", "Aria");
        player.gold = 77;
        store.save(&player).unwrap();

        let loaded = store.load("1234").unwrap();
        assert_eq!(loaded, player);
        assert!(dir.path().join("1234.json").exists());
    }

    #[test]
    fn test_json_store_missing_player() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPlayerStore::new(dir.path()).unwrap();
        assert!(matches!(store.load("nobody"), Err(RaidError::PlayerNotFound(_))));
    }

    #[test]
    fn test_json_store_sanitizes_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonPlayerStore::new(dir.path()).unwrap();
        let player = Player::new("../evil", "Sneaky");
        store.save(&player).unwrap();
        assert!(dir.path().join("___evil.json").exists());
        assert_eq!(store.load("../evil").unwrap().name, "Sneaky");
    }

    #[test]
    fn test_json_store_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{").unwrap();
        let store = JsonPlayerStore::new(dir.path()).unwrap();
        assert!(matches!(store.load("bad"), Err(RaidError::Json(_))));
    }
}
