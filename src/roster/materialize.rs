//! Resolve roster ids into full catalog records

use crate::catalog::{Catalog, CatalogStore, Pokemon};
use crate::core::error::PokedexError;
use crate::core::types::PokemonId;
use crate::fetch::CatalogFetcher;
use crate::roster::diagnostics::Diagnostics;
use crate::roster::engine::{in_supported_range, out_of_range_message};

pub(crate) fn load_failure_message(id: PokemonId, err: &PokedexError) -> String {
    match err {
        PokedexError::NotFound(_) | PokedexError::Fetch(_) => {
            format!("Could not load Pokémon #{}.", id)
        }
        other => format!("Could not load Pokémon #{}: {}", id, other),
    }
}

/// Resolve ids in order, fetching unknown ones on demand
///
/// Ids that cannot be resolved are reported and skipped, so the result may be
/// shorter than the input.
pub fn materialize<S: CatalogStore, F: CatalogFetcher>(
    catalog: &mut Catalog<S, F>,
    ids: &[PokemonId],
    diagnostics: &mut Diagnostics,
) -> Vec<Pokemon> {
    let mut team = Vec::with_capacity(ids.len());
    for &id in ids {
        match catalog.get(id) {
            Ok(Some(pokemon)) => {
                team.push(pokemon);
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                diagnostics.error(load_failure_message(id, &e));
                continue;
            }
        }

        if !in_supported_range(id as i64) {
            diagnostics.error(out_of_range_message(id as i64));
            continue;
        }

        match catalog.get_or_fetch(id) {
            Ok(pokemon) => team.push(pokemon),
            Err(e) => diagnostics.error(load_failure_message(id, &e)),
        }
    }
    team
}
