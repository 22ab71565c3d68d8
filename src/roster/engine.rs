//! Roster mutation engine
//!
//! Each action reads both rosters, reports problems into [`Diagnostics`] and
//! leaves the rosters in a valid state: at most [`ROSTER_CAPACITY`] members,
//! no duplicates, nothing outside the supported id range.
//!
//! When several checks fail at once only the first fires, in this order:
//! duplicate, capacity, range, fetch.

use rand::seq::index;
use rand::Rng;

use crate::catalog::{Catalog, CatalogStore};
use crate::core::constants::{MAX_POKEMON_ID, MIN_POKEMON_ID, ROSTER_CAPACITY};
use crate::core::types::PokemonId;
use crate::fetch::CatalogFetcher;
use crate::roster::action::{ClearTarget, FormationAction};
use crate::roster::diagnostics::Diagnostics;
use crate::roster::materialize::load_failure_message;
use crate::roster::slot::TeamSlot;
use crate::roster::state::Rosters;

pub fn in_supported_range(raw: i64) -> bool {
    (MIN_POKEMON_ID as i64..=MAX_POKEMON_ID as i64).contains(&raw)
}

pub fn out_of_range_message(raw: i64) -> String {
    format!(
        "Pokémon ID {} is out of range ({}-{}).",
        raw, MIN_POKEMON_ID, MAX_POKEMON_ID
    )
}

/// Check an id against the supported range
pub fn validate_id(raw: i64) -> Result<PokemonId, String> {
    if in_supported_range(raw) {
        Ok(raw as PokemonId)
    } else {
        Err(out_of_range_message(raw))
    }
}

/// Append a member after validating it and making sure its record resolves
pub fn add<S: CatalogStore, F: CatalogFetcher>(
    rosters: &mut Rosters,
    slot: TeamSlot,
    raw_id: i64,
    catalog: &mut Catalog<S, F>,
    diagnostics: &mut Diagnostics,
) {
    let roster = rosters.get(slot);

    if roster.iter().any(|&id| id as i64 == raw_id) {
        diagnostics.error(format!(
            "Pokémon #{} is already in this roster (team {}).",
            raw_id, slot
        ));
        return;
    }

    if roster.len() >= ROSTER_CAPACITY {
        diagnostics.error(format!(
            "Team {} roster is full ({} max).",
            slot, ROSTER_CAPACITY
        ));
        return;
    }

    let id = match validate_id(raw_id) {
        Ok(id) => id,
        Err(message) => {
            diagnostics.error(message);
            return;
        }
    };

    match catalog.get_or_fetch(id) {
        Ok(pokemon) => {
            rosters.get_mut(slot).push(id);
            tracing::info!("Added {} to team {}", pokemon, slot);
            diagnostics.notice(format!("{} added to team {}.", pokemon.name, slot));
        }
        Err(e) => diagnostics.error(load_failure_message(id, &e)),
    }
}

/// Remove a member by value; absent ids are ignored
pub fn remove(rosters: &mut Rosters, slot: TeamSlot, raw_id: i64) {
    let roster = rosters.get_mut(slot);
    let before = roster.len();
    roster.retain(|&id| id as i64 != raw_id);
    if roster.len() != before {
        tracing::info!("Removed #{} from team {}", raw_id, slot);
    }
}

pub fn clear(rosters: &mut Rosters, target: ClearTarget) {
    match target {
        ClearTarget::Team(slot) => rosters.get_mut(slot).clear(),
        ClearTarget::Both => {
            rosters.a.clear();
            rosters.b.clear();
        }
    }
    tracing::info!("Cleared {:?}", target);
}

/// Draw distinct ids uniformly from the supported range
pub fn draw_distinct_ids<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PokemonId> {
    let span = (MAX_POKEMON_ID - MIN_POKEMON_ID + 1) as usize;
    index::sample(rng, span, count.min(span))
        .into_iter()
        .map(|i| MIN_POKEMON_ID + i as PokemonId)
        .collect()
}

/// Replace a roster with a full random draw
///
/// Every draw is attempted; the roster keeps whichever ones resolved.
pub fn auto_fill<S: CatalogStore, F: CatalogFetcher, R: Rng + ?Sized>(
    rosters: &mut Rosters,
    slot: TeamSlot,
    catalog: &mut Catalog<S, F>,
    rng: &mut R,
    diagnostics: &mut Diagnostics,
) {
    let errors_before = diagnostics.error_count();
    let drawn = draw_distinct_ids(rng, ROSTER_CAPACITY);
    tracing::debug!("Auto-fill draw for team {}: {:?}", slot, drawn);

    let mut filled = Vec::with_capacity(drawn.len());
    for id in drawn {
        match catalog.get_or_fetch(id) {
            Ok(_) => filled.push(id),
            Err(e) => diagnostics.error(load_failure_message(id, &e)),
        }
    }

    let count = filled.len();
    *rosters.get_mut(slot) = filled;

    if diagnostics.error_count() == errors_before {
        diagnostics.notice(format!(
            "Team {} auto-filled with {} random Pokémon.",
            slot, count
        ));
    }
}

/// Apply one action and hand back the updated rosters
///
/// `Battle` leaves the rosters alone; it is resolved after materialization.
pub fn apply_action<S: CatalogStore, F: CatalogFetcher, R: Rng + ?Sized>(
    mut rosters: Rosters,
    action: FormationAction,
    catalog: &mut Catalog<S, F>,
    rng: &mut R,
    diagnostics: &mut Diagnostics,
) -> Rosters {
    match action {
        FormationAction::Add { team, pokemon_id } => {
            add(&mut rosters, team, pokemon_id, catalog, diagnostics)
        }
        FormationAction::Remove { team, pokemon_id } => remove(&mut rosters, team, pokemon_id),
        FormationAction::Clear { target } => clear(&mut rosters, target),
        FormationAction::AutoFill { team } => {
            auto_fill(&mut rosters, team, catalog, rng, diagnostics)
        }
        FormationAction::Battle => {}
    }
    rosters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryStore, Pokemon};
    use crate::fetch::StaticFetcher;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn full_catalog() -> Catalog<MemoryStore, StaticFetcher> {
        let records = (MIN_POKEMON_ID..=MAX_POKEMON_ID).map(|n| Pokemon::new(n, format!("Mon{}", n)));
        Catalog::new(MemoryStore::new(), StaticFetcher::new(records))
    }

    #[test]
    fn test_validate_id_bounds() {
        assert_eq!(validate_id(1), Ok(1));
        assert_eq!(validate_id(251), Ok(251));
        assert!(validate_id(0).is_err());
        assert!(validate_id(252).is_err());
        assert!(validate_id(-5).is_err());
    }

    #[test]
    fn test_add_appends_and_notices() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::default();
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 25, &mut catalog, &mut diagnostics);

        assert_eq!(rosters.a, vec![25]);
        assert!(rosters.b.is_empty());
        assert_eq!(diagnostics.notices, vec!["Mon25 added to team A.".to_string()]);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![25], vec![]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 25, &mut catalog, &mut diagnostics);

        assert_eq!(rosters.a, vec![25]);
        assert!(diagnostics.errors[0].contains("already in this roster"));
    }

    #[test]
    fn test_same_id_allowed_on_other_team() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![25], vec![]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::B, 25, &mut catalog, &mut diagnostics);
        assert_eq!(rosters.b, vec![25]);
    }

    #[test]
    fn test_add_to_full_roster_rejected() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![1, 2, 3, 4, 5], vec![]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 6, &mut catalog, &mut diagnostics);

        assert_eq!(rosters.a.len(), 5);
        assert_eq!(diagnostics.errors, vec!["Team A roster is full (5 max).".to_string()]);
    }

    #[test]
    fn test_check_order_duplicate_before_capacity() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![1, 2, 3, 4, 5], vec![]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 3, &mut catalog, &mut diagnostics);
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.errors[0].contains("already in this roster"));
    }

    #[test]
    fn test_check_order_capacity_before_range() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![1, 2, 3, 4, 5], vec![]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 999, &mut catalog, &mut diagnostics);
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.errors[0].contains("full"));
    }

    #[test]
    fn test_out_of_range_never_touches_store() {
        let mut catalog = full_catalog();
        let mut rosters = Rosters::new(vec![1], vec![2]);
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 300, &mut catalog, &mut diagnostics);

        assert_eq!(rosters, Rosters::new(vec![1], vec![2]));
        assert_eq!(diagnostics.errors, vec!["Pokémon ID 300 is out of range (1-251).".to_string()]);
        assert_eq!(catalog.fetcher().attempts(), 0);
    }

    #[test]
    fn test_add_fetch_failure_is_an_error() {
        let mut catalog = Catalog::new(MemoryStore::new(), StaticFetcher::default());
        let mut rosters = Rosters::default();
        let mut diagnostics = Diagnostics::new();

        add(&mut rosters, TeamSlot::A, 10, &mut catalog, &mut diagnostics);

        assert!(rosters.a.is_empty());
        assert_eq!(diagnostics.errors, vec!["Could not load Pokémon #10.".to_string()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut rosters = Rosters::new(vec![1, 2, 3], vec![2]);
        remove(&mut rosters, TeamSlot::A, 2);
        remove(&mut rosters, TeamSlot::A, 42);
        assert_eq!(rosters, Rosters::new(vec![1, 3], vec![2]));
    }

    #[test]
    fn test_clear_one_and_both() {
        let mut rosters = Rosters::new(vec![1], vec![2]);
        clear(&mut rosters, ClearTarget::Team(TeamSlot::B));
        assert_eq!(rosters, Rosters::new(vec![1], vec![]));

        clear(&mut rosters, ClearTarget::Both);
        assert_eq!(rosters, Rosters::default());
    }

    #[test]
    fn test_draw_is_distinct_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let mut ids = draw_distinct_ids(&mut rng, 5);
            assert_eq!(ids.len(), 5);
            assert!(ids.iter().all(|&id| (1..=251).contains(&id)));
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 5);
        }
    }

    #[test]
    fn test_auto_fill_replaces_roster() {
        let mut catalog = full_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut rosters = Rosters::new(vec![1], vec![7, 8]);
        let mut diagnostics = Diagnostics::new();

        auto_fill(&mut rosters, TeamSlot::B, &mut catalog, &mut rng, &mut diagnostics);

        assert_eq!(rosters.a, vec![1]);
        assert_eq!(rosters.b.len(), 5);
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.notices.len(), 1);
    }

    #[test]
    fn test_auto_fill_partial_failure_keeps_successes() {
        // Only odd ids are fetchable
        let records = (1..=251u32).filter(|n| n % 2 == 1).map(|n| Pokemon::new(n, "Odd"));
        let mut catalog = Catalog::new(MemoryStore::new(), StaticFetcher::new(records));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut rosters = Rosters::default();
        let mut diagnostics = Diagnostics::new();

        auto_fill(&mut rosters, TeamSlot::B, &mut catalog, &mut rng, &mut diagnostics);

        assert_eq!(rosters.b.len() + diagnostics.error_count(), 5);
        assert!(rosters.b.iter().all(|id| id % 2 == 1));
        if diagnostics.has_errors() {
            assert!(diagnostics.notices.is_empty());
        }
    }

    #[test]
    fn test_battle_action_leaves_rosters() {
        let mut catalog = full_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut diagnostics = Diagnostics::new();
        let rosters = Rosters::new(vec![1, 2], vec![3]);

        let after = apply_action(
            rosters.clone(),
            FormationAction::Battle,
            &mut catalog,
            &mut rng,
            &mut diagnostics,
        );
        assert_eq!(after, rosters);
        assert_eq!(diagnostics, Diagnostics::new());
    }
}
