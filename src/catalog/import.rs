//! Bulk import of an id range into the catalog

use serde::Serialize;

use crate::catalog::service::Catalog;
use crate::catalog::store::CatalogStore;
use crate::core::types::PokemonId;
use crate::fetch::CatalogFetcher;

/// Outcome of a bulk import
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// (number, name) of every record written
    pub imported: Vec<(PokemonId, String)>,
    pub failed: Vec<PokemonId>,
}

/// Import every id in `start..=end`; `end` defaults to `start`
///
/// Reversed bounds are swapped. A failed id is recorded and the loop moves on.
pub fn import_range<S: CatalogStore, F: CatalogFetcher>(
    catalog: &mut Catalog<S, F>,
    start: PokemonId,
    end: Option<PokemonId>,
) -> ImportReport {
    let end = end.unwrap_or(start);
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let mut report = ImportReport::default();
    for id in start..=end {
        tracing::info!("Fetching pokemon {}...", id);
        match catalog.import(id) {
            Ok(pokemon) => report.imported.push((pokemon.number, pokemon.name)),
            Err(e) => {
                tracing::warn!("Failed to import {}: {}", id, e);
                report.failed.push(id);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::Pokemon;
    use crate::catalog::store::MemoryStore;
    use crate::fetch::StaticFetcher;

    fn catalog() -> Catalog<MemoryStore, StaticFetcher> {
        let remote = vec![
            Pokemon::new(1, "Bulbasaur"),
            Pokemon::new(2, "Ivysaur"),
            Pokemon::new(4, "Charmander"),
        ];
        Catalog::new(MemoryStore::new(), StaticFetcher::new(remote))
    }

    #[test]
    fn test_import_single_id() {
        let mut catalog = catalog();
        let report = import_range(&mut catalog, 2, None);
        assert_eq!(report.imported, vec![(2, "Ivysaur".to_string())]);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_import_swaps_reversed_bounds_and_continues_past_failures() {
        let mut catalog = catalog();
        let report = import_range(&mut catalog, 4, Some(1));

        let imported: Vec<PokemonId> = report.imported.iter().map(|(n, _)| *n).collect();
        assert_eq!(imported, vec![1, 2, 4]);
        assert_eq!(report.failed, vec![3]);
        assert_eq!(catalog.store().count().unwrap(), 3);
    }
}
