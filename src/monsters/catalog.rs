//! Read-only monster catalog access.
//!
//! The catalog is owned elsewhere; raids only query it by rarity tier.

use std::fs;
use std::path::PathBuf;

use super::data::builtin_templates;
use super::types::{MonsterTemplate, RarityTier};
use crate::core::error::{RaidError, Result};

pub trait MonsterCatalog {
    /// All templates whose identifier starts with the tier's letter.
    fn find_by_tier(&self, tier: RarityTier) -> Result<Vec<MonsterTemplate>>;
}

impl<C: MonsterCatalog + ?Sized> MonsterCatalog for &C {
    fn find_by_tier(&self, tier: RarityTier) -> Result<Vec<MonsterTemplate>> {
        (**self).find_by_tier(tier)
    }
}

/// Catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    templates: Vec<MonsterTemplate>,
}

impl MemoryCatalog {
    pub fn new(templates: Vec<MonsterTemplate>) -> Self {
        Self { templates }
    }
}

impl MonsterCatalog for MemoryCatalog {
    fn find_by_tier(&self, tier: RarityTier) -> Result<Vec<MonsterTemplate>> {
        Ok(self
            .templates
            .iter()
            .filter(|t| t.in_tier(tier))
            .cloned()
            .collect())
    }
}

/// The monsters shipped with the game.
pub fn builtin_catalog() -> MemoryCatalog {
    MemoryCatalog::new(builtin_templates())
}

/// Catalog backed by a JSON array of templates on disk.
///
/// The file is read on every query so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<MonsterTemplate>> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            RaidError::CatalogUnavailable(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            RaidError::CatalogUnavailable(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl MonsterCatalog for JsonFileCatalog {
    fn find_by_tier(&self, tier: RarityTier) -> Result<Vec<MonsterTemplate>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.in_tier(tier))
            .collect())
    }
}
