//! Catalog service: store lookups with remote fallback

use crate::catalog::query::{CatalogQuery, Page};
use crate::catalog::record::Pokemon;
use crate::catalog::store::CatalogStore;
use crate::core::error::{PokedexError, Result};
use crate::core::types::PokemonId;
use crate::fetch::CatalogFetcher;

/// A store paired with the fetcher that fills it
pub struct Catalog<S, F> {
    store: S,
    fetcher: F,
}

impl<S: CatalogStore, F: CatalogFetcher> Catalog<S, F> {
    pub fn new(store: S, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Local record only, no remote call
    pub fn get(&self, id: PokemonId) -> Result<Option<Pokemon>> {
        self.store.get(id)
    }

    /// Fetch from the remote source and upsert, overwriting any stored copy
    pub fn import(&mut self, id: PokemonId) -> Result<Pokemon> {
        let mut pokemon = self.fetcher.fetch(id)?;
        pokemon.truncate_description();
        self.store.upsert(&pokemon)?;
        tracing::info!("Imported {} ({})", pokemon.name, pokemon.number);
        Ok(pokemon)
    }

    /// Stored record, importing it on first access
    pub fn get_or_fetch(&mut self, id: PokemonId) -> Result<Pokemon> {
        if let Some(pokemon) = self.store.get(id)? {
            return Ok(pokemon);
        }
        match self.import(id) {
            Ok(pokemon) => Ok(pokemon),
            Err(PokedexError::Fetch(e)) => {
                tracing::debug!("#{} not stored and not fetchable: {}", id, e);
                Err(PokedexError::NotFound(id))
            }
            Err(e) => Err(e),
        }
    }

    pub fn search(&self, query: &CatalogQuery) -> Result<Page<Pokemon>> {
        self.store.query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MemoryStore;
    use crate::fetch::StaticFetcher;

    #[test]
    fn test_get_or_fetch_prefers_store() {
        let store = MemoryStore::with_records(vec![Pokemon::new(1, "Bulbasaur")]);
        let mut catalog = Catalog::new(store, StaticFetcher::default());

        assert_eq!(catalog.get_or_fetch(1).unwrap().name, "Bulbasaur");
        assert_eq!(catalog.fetcher().attempts(), 0);
    }

    #[test]
    fn test_get_or_fetch_imports_and_truncates() {
        let remote = Pokemon::new(4, "Charmander").with_description("f".repeat(300));
        let mut catalog = Catalog::new(MemoryStore::new(), StaticFetcher::new(vec![remote]));

        let fetched = catalog.get_or_fetch(4).unwrap();
        assert_eq!(fetched.description.chars().count(), 200);
        assert_eq!(catalog.store().get(4).unwrap(), Some(fetched));

        // Second access is served locally
        catalog.get_or_fetch(4).unwrap();
        assert_eq!(catalog.fetcher().attempts(), 1);
    }

    #[test]
    fn test_get_or_fetch_not_found() {
        let mut catalog = Catalog::new(MemoryStore::new(), StaticFetcher::default());
        assert!(matches!(catalog.get_or_fetch(9999), Err(PokedexError::NotFound(9999))));
    }

    #[test]
    fn test_import_overwrites() {
        let store = MemoryStore::with_records(vec![Pokemon::new(7, "Old Name")]);
        let fetcher = StaticFetcher::new(vec![Pokemon::new(7, "Squirtle")]);
        let mut catalog = Catalog::new(store, fetcher);

        catalog.import(7).unwrap();
        assert_eq!(catalog.get(7).unwrap().unwrap().name, "Squirtle");
    }
}
