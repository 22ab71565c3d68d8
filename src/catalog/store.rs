//! Keyed record storage for the catalog

use std::collections::BTreeMap;

use crate::catalog::query::{paginate, CatalogQuery, Page};
use crate::catalog::record::Pokemon;
use crate::core::error::Result;
use crate::core::types::PokemonId;

/// Record table keyed by dex number with upsert semantics
pub trait CatalogStore {
    /// Insert or overwrite the record with the same number
    fn upsert(&mut self, pokemon: &Pokemon) -> Result<()>;

    fn get(&self, id: PokemonId) -> Result<Option<Pokemon>>;

    /// Filtered, number-ordered page of records
    fn query(&self, query: &CatalogQuery) -> Result<Page<Pokemon>>;

    fn count(&self) -> Result<usize>;
}

/// In-memory store, ordered by number
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<PokemonId, Pokemon>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = Pokemon>) -> Self {
        Self {
            records: records.into_iter().map(|p| (p.number, p)).collect(),
        }
    }
}

impl CatalogStore for MemoryStore {
    fn upsert(&mut self, pokemon: &Pokemon) -> Result<()> {
        self.records.insert(pokemon.number, pokemon.clone());
        Ok(())
    }

    fn get(&self, id: PokemonId) -> Result<Option<Pokemon>> {
        Ok(self.records.get(&id).cloned())
    }

    fn query(&self, query: &CatalogQuery) -> Result<Page<Pokemon>> {
        let rows: Vec<Pokemon> = self
            .records
            .values()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();
        Ok(paginate(&rows, query))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}
