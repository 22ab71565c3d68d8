//! Roster state: the two id lists stored in a session

use serde::Serialize;
use serde_json::Value;

use crate::core::constants::ROSTER_CAPACITY;
use crate::core::types::PokemonId;
use crate::roster::session::Session;
use crate::roster::slot::TeamSlot;

/// Identifier lists for both team slots, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rosters {
    pub a: Vec<PokemonId>,
    pub b: Vec<PokemonId>,
}

impl Rosters {
    pub fn new(a: Vec<PokemonId>, b: Vec<PokemonId>) -> Self {
        Self { a, b }
    }

    pub fn get(&self, slot: TeamSlot) -> &Vec<PokemonId> {
        match slot {
            TeamSlot::A => &self.a,
            TeamSlot::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, slot: TeamSlot) -> &mut Vec<PokemonId> {
        match slot {
            TeamSlot::A => &mut self.a,
            TeamSlot::B => &mut self.b,
        }
    }
}

/// Interpret one stored element as an id, if it is one
///
/// Only whole numbers and numeric strings count; floats are not truncated.
fn parse_id(value: &Value) -> Option<PokemonId> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| PokemonId::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read one roster; anything that is not an id is silently dropped
///
/// Repeats are dropped (first occurrence wins) and the list is capped at
/// `ROSTER_CAPACITY`, whatever the session holds.
pub fn read_roster(session: &dyn Session, slot: TeamSlot) -> Vec<PokemonId> {
    let items = match session.get(slot.session_key()) {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };

    let mut roster = Vec::with_capacity(ROSTER_CAPACITY);
    for id in items.iter().filter_map(parse_id) {
        if roster.len() == ROSTER_CAPACITY {
            break;
        }
        if !roster.contains(&id) {
            roster.push(id);
        }
    }
    roster
}

/// Replace one roster wholesale
pub fn write_roster(session: &mut dyn Session, slot: TeamSlot, ids: &[PokemonId]) {
    let values = ids.iter().map(|&id| Value::from(id)).collect();
    session.set(slot.session_key(), Value::Array(values));
}

pub fn read_rosters(session: &dyn Session) -> Rosters {
    Rosters {
        a: read_roster(session, TeamSlot::A),
        b: read_roster(session, TeamSlot::B),
    }
}

pub fn write_rosters(session: &mut dyn Session, rosters: &Rosters) {
    for slot in TeamSlot::ALL {
        write_roster(session, slot, rosters.get(slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::session::MemorySession;
    use serde_json::json;

    #[test]
    fn test_fresh_session_reads_empty() {
        let session = MemorySession::new();
        assert_eq!(read_rosters(&session), Rosters::default());
    }

    #[test]
    fn test_unparseable_values_dropped() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([1, "25", "pikachu", null, -3, 4.5, " 7 "]));
        session.set("team_b", json!("not a list"));

        assert_eq!(read_roster(&session, TeamSlot::A), vec![1, 25, 7]);
        assert!(read_roster(&session, TeamSlot::B).is_empty());
    }

    #[test]
    fn test_repeats_dropped_and_capped() {
        let mut session = MemorySession::new();
        session.set("team_a", json!([1, 1, 1, 1, 1, 1, 1]));
        session.set("team_b", json!([4, "4", 9, 2, 9, 8, 7, 6, 5]));

        assert_eq!(read_roster(&session, TeamSlot::A), vec![1]);
        assert_eq!(read_roster(&session, TeamSlot::B), vec![4, 9, 2, 8, 7]);
    }

    #[test]
    fn test_write_replaces_and_marks_dirty() {
        let mut session = MemorySession::new();
        write_roster(&mut session, TeamSlot::B, &[3, 6, 9]);
        write_roster(&mut session, TeamSlot::B, &[6]);

        assert!(session.is_modified());
        assert_eq!(read_roster(&session, TeamSlot::B), vec![6]);
        assert_eq!(session.get("team_b"), Some(&json!([6])));
    }
}
