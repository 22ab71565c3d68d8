//! Domain constants - all fixed values in one place

use crate::core::types::PokemonId;

// Roster
pub const ROSTER_CAPACITY: usize = 5;
pub const MIN_POKEMON_ID: PokemonId = 1;
pub const MAX_POKEMON_ID: PokemonId = 251; // Gen 1 + Gen 2

// Catalog
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const DEFAULT_PAGE_SIZE: usize = 24;
