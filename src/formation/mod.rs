//! Formation workflow: one request against a session's two rosters
//!
//! Order of work:
//! 1. read both rosters from the session
//! 2. apply the submitted action (if any)
//! 3. write both rosters back
//! 4. materialize both rosters into records
//! 5. for a battle request with no errors so far, resolve the battle

use rand::Rng;
use serde::Serialize;

use crate::battle::{resolve_battle, BattleResult, RngJitter};
use crate::catalog::{Catalog, CatalogStore, Pokemon};
use crate::fetch::CatalogFetcher;
use crate::roster::{
    apply_action, materialize, read_rosters, write_rosters, Diagnostics, FormationAction,
    Session,
};

pub const EMPTY_TEAM_MESSAGE: &str = "Both teams need at least one Pokémon to battle.";

/// Everything the presentation layer renders after a formation request
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormationOutcome {
    pub team_a: Vec<Pokemon>,
    pub team_b: Vec<Pokemon>,
    pub diagnostics: Diagnostics,
    pub battle: Option<BattleResult>,
}

/// Handle one formation request
///
/// Never fails: every problem is reported through the outcome's diagnostics.
/// `rng` feeds both auto-fill draws and battle jitter.
pub fn handle_formation<S, F, R>(
    session: &mut dyn Session,
    catalog: &mut Catalog<S, F>,
    action: Option<FormationAction>,
    rng: &mut R,
) -> FormationOutcome
where
    S: CatalogStore,
    F: CatalogFetcher,
    R: Rng + ?Sized,
{
    let mut diagnostics = Diagnostics::new();
    let mut rosters = read_rosters(session);

    if let Some(action) = action {
        tracing::debug!("Formation action: {:?}", action);
        rosters = apply_action(rosters, action, catalog, rng, &mut diagnostics);
        write_rosters(session, &rosters);
    }

    let team_a = materialize(catalog, &rosters.a, &mut diagnostics);
    let team_b = materialize(catalog, &rosters.b, &mut diagnostics);

    let mut battle = None;
    if action == Some(FormationAction::Battle) {
        if team_a.is_empty() || team_b.is_empty() {
            diagnostics.error(EMPTY_TEAM_MESSAGE);
        } else if !diagnostics.has_errors() {
            let mut jitter = RngJitter::new(rng);
            battle = Some(resolve_battle(&team_a, &team_b, &mut jitter));
        }
    }

    FormationOutcome {
        team_a,
        team_b,
        diagnostics,
        battle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BaseStats, MemoryStore};
    use crate::fetch::StaticFetcher;
    use crate::roster::{read_roster, MemorySession, TeamSlot};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn catalog() -> Catalog<MemoryStore, StaticFetcher> {
        let remote = (1..=251u32).map(|n| {
            Pokemon::new(n, format!("Mon{}", n)).with_stats(BaseStats::uniform(n % 100))
        });
        Catalog::new(MemoryStore::new(), StaticFetcher::new(remote))
    }

    #[test]
    fn test_plain_view_does_not_touch_session() {
        let mut session = MemorySession::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = handle_formation(&mut session, &mut catalog(), None, &mut rng);

        assert!(outcome.team_a.is_empty());
        assert!(outcome.battle.is_none());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_add_persists_and_materializes() {
        let mut session = MemorySession::new();
        let mut catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let action = FormationAction::Add {
            team: TeamSlot::A,
            pokemon_id: 25,
        };
        let outcome = handle_formation(&mut session, &mut catalog, Some(action), &mut rng);

        assert_eq!(read_roster(&session, TeamSlot::A), vec![25]);
        assert_eq!(outcome.team_a[0].name, "Mon25");
        assert_eq!(outcome.diagnostics.notices, vec!["Mon25 added to team A.".to_string()]);
    }

    #[test]
    fn test_battle_with_empty_team_blocked() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([1]));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = handle_formation(
            &mut session,
            &mut catalog(),
            Some(FormationAction::Battle),
            &mut rng,
        );

        assert!(outcome.battle.is_none());
        assert_eq!(outcome.diagnostics.errors, vec![EMPTY_TEAM_MESSAGE.to_string()]);
    }

    #[test]
    fn test_battle_runs_when_both_teams_present() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([99, 98]));
        session.set("team_b", json!(["1"]));
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let outcome = handle_formation(
            &mut session,
            &mut catalog(),
            Some(FormationAction::Battle),
            &mut rng,
        );

        let battle = outcome.battle.expect("battle should run");
        assert_eq!(battle.rounds.len(), 2);
        // 99-stat vs 1-stat cannot be flipped by +/-10 jitter
        assert_eq!(battle.verdict, "Victory for team A");
        assert_eq!(battle.wins_a, 2);
    }

    #[test]
    fn test_stored_repeats_cannot_stack_a_team() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([1, 1, 1, 1, 1, 1, 1]));
        session.set("team_b", json!([2]));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = handle_formation(
            &mut session,
            &mut catalog(),
            Some(FormationAction::Battle),
            &mut rng,
        );

        assert_eq!(outcome.team_a.len(), 1);
        let battle = outcome.battle.expect("battle should run");
        assert_eq!(battle.rounds.len(), 1);
    }

    #[test]
    fn test_materialization_error_blocks_battle() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([1, 400]));
        session.set("team_b", json!([2]));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = handle_formation(
            &mut session,
            &mut catalog(),
            Some(FormationAction::Battle),
            &mut rng,
        );

        assert_eq!(outcome.team_a.len(), 1);
        assert_eq!(outcome.diagnostics.error_count(), 1);
        assert!(outcome.battle.is_none());
    }
}
