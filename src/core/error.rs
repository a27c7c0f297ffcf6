//! Error type shared by catalog access, raid generation and persistence.

use thiserror::Error;

use crate::monsters::RarityTier;

#[derive(Debug, Error)]
pub enum RaidError {
    #[error("monster catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("no monsters available for tier {0}")]
    NoMonstersForTier(RarityTier),

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RaidError {
    /// True when raid generation failed before any player state was touched.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            RaidError::CatalogUnavailable(_) | RaidError::NoMonstersForTier(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RaidError>;
