use serde::{Deserialize, Serialize};

/// One of the two rosters kept per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSlot {
    A,
    B,
}

impl TeamSlot {
    pub const ALL: [TeamSlot; 2] = [TeamSlot::A, TeamSlot::B];

    /// Session key holding this roster
    pub fn session_key(self) -> &'static str {
        match self {
            TeamSlot::A => "team_a",
            TeamSlot::B => "team_b",
        }
    }

    /// Parse a request parameter (`A`/`B`, any case)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "A" | "a" => Some(TeamSlot::A),
            "B" | "b" => Some(TeamSlot::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSlot::A => f.write_str("A"),
            TeamSlot::B => f.write_str("B"),
        }
    }
}
