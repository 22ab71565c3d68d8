//! Remote catalog fetching
//!
//! The core only sees [`CatalogFetcher`]: an identifier goes in, a normalized
//! record or a [`FetchError`] comes out. One attempt per call, no retries.

pub mod client;
pub mod normalize;

use std::cell::Cell;

use ahash::AHashMap;
use thiserror::Error;

use crate::catalog::record::Pokemon;
use crate::core::types::PokemonId;

pub use client::{PokeApiClient, PokeApiFetcher};
pub use normalize::{normalize, title_case, ApiPokemon, ApiSpecies};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Pokemon #{0} is not available")]
    Unavailable(PokemonId),
}

/// Source of normalized catalog records
pub trait CatalogFetcher {
    fn fetch(&self, id: PokemonId) -> Result<Pokemon, FetchError>;
}

impl<T: CatalogFetcher + ?Sized> CatalogFetcher for Box<T> {
    fn fetch(&self, id: PokemonId) -> Result<Pokemon, FetchError> {
        (**self).fetch(id)
    }
}

/// Fetcher serving a fixed set of records from memory
///
/// Used for offline runs and tests. Counts every attempt, hit or miss.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    records: AHashMap<PokemonId, Pokemon>,
    attempts: Cell<usize>,
}

impl StaticFetcher {
    pub fn new(records: impl IntoIterator<Item = Pokemon>) -> Self {
        Self {
            records: records.into_iter().map(|p| (p.number, p)).collect(),
            attempts: Cell::new(0),
        }
    }

    /// Number of fetches attempted so far
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl CatalogFetcher for StaticFetcher {
    fn fetch(&self, id: PokemonId) -> Result<Pokemon, FetchError> {
        self.attempts.set(self.attempts.get() + 1);
        self.records
            .get(&id)
            .cloned()
            .ok_or(FetchError::Unavailable(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_fetcher_counts_attempts() {
        let fetcher = StaticFetcher::new(vec![Pokemon::new(4, "Charmander")]);
        assert_eq!(fetcher.fetch(4).unwrap().name, "Charmander");
        assert_eq!(fetcher.fetch(5), Err(FetchError::Unavailable(5)));
        assert_eq!(fetcher.attempts(), 2);
    }
}
