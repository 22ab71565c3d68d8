//! Catalog record: one creature entry with its base stats

use serde::{Deserialize, Serialize};

use crate::core::constants::DESCRIPTION_MAX_CHARS;
use crate::core::types::PokemonId;

/// Base combat attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Same value for every attribute
    pub fn uniform(value: u32) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }
}

/// A creature entry as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Primary key, stable across fetches
    pub number: PokemonId,
    pub name: String,
    /// Slash-separated type tag, e.g. `Grass/Poison`
    pub types: String,
    /// Sprite URL, empty when the source has none
    pub image: String,
    pub description: String,
    pub stats: BaseStats,
}

impl Pokemon {
    pub fn new(number: PokemonId, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            types: String::new(),
            image: String::new(),
            description: String::new(),
            stats: BaseStats::default(),
        }
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = types.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Clamp the description to what the store accepts
    pub fn truncate_description(&mut self) {
        if let Some((byte_idx, _)) = self.description.char_indices().nth(DESCRIPTION_MAX_CHARS) {
            self.description.truncate(byte_idx);
        }
    }
}

impl std::fmt::Display for Pokemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03} {}", self.number, self.name)
    }
}
