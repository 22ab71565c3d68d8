//! Slot-by-slot battle resolution between two materialized rosters
//!
//! Slot `i` pits the i-th member of each team against each other. A member
//! without an opponent takes the slot unopposed; otherwise each side's power
//! score gets its own fresh jitter draw (A first, then B) and the higher
//! adjusted score wins. Exact ties are draws and count for nobody.

use serde::Serialize;

use crate::battle::jitter::JitterSource;
use crate::battle::power::power_score;
use crate::catalog::Pokemon;
use crate::roster::TeamSlot;

/// Winner of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundWinner {
    A,
    B,
    Draw,
}

impl RoundWinner {
    fn team(slot: TeamSlot) -> Self {
        match slot {
            TeamSlot::A => RoundWinner::A,
            TeamSlot::B => RoundWinner::B,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleRound {
    /// One-based slot position
    pub index: usize,
    pub member_a: Option<Pokemon>,
    pub member_b: Option<Pokemon>,
    pub winner: RoundWinner,
    pub reason: String,
}

/// Overall outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleVerdict {
    Victory(TeamSlot),
    NoDecision,
}

impl std::fmt::Display for BattleVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleVerdict::Victory(slot) => write!(f, "Victory for team {}", slot),
            BattleVerdict::NoDecision => f.write_str("Draw - no decision"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleResult {
    pub rounds: Vec<BattleRound>,
    pub wins_a: usize,
    pub wins_b: usize,
    pub outcome: BattleVerdict,
    /// Human-readable form of `outcome`
    pub verdict: String,
}

fn resolve_slot(
    index: usize,
    a: Option<&Pokemon>,
    b: Option<&Pokemon>,
    jitter: &mut dyn JitterSource,
) -> BattleRound {
    let (winner, reason) = match (a, b) {
        (Some(_), None) => (RoundWinner::team(TeamSlot::A), "opposing team incomplete".to_string()),
        (None, Some(_)) => (RoundWinner::team(TeamSlot::B), "opposing team incomplete".to_string()),
        (Some(pa), Some(pb)) => {
            let score_a = power_score(&pa.stats) + jitter.next_jitter();
            let score_b = power_score(&pb.stats) + jitter.next_jitter();
            let winner = if score_a > score_b {
                RoundWinner::A
            } else if score_b > score_a {
                RoundWinner::B
            } else {
                RoundWinner::Draw
            };
            let reason = format!(
                "{} {:.1} vs {} {:.1}",
                pa.name, score_a, pb.name, score_b
            );
            (winner, reason)
        }
        (None, None) => (RoundWinner::Draw, "empty slot".to_string()),
    };

    BattleRound {
        index,
        member_a: a.cloned(),
        member_b: b.cloned(),
        winner,
        reason,
    }
}

/// Fight every slot and tally the result
pub fn resolve_battle(
    team_a: &[Pokemon],
    team_b: &[Pokemon],
    jitter: &mut dyn JitterSource,
) -> BattleResult {
    let slots = team_a.len().max(team_b.len());
    let mut rounds = Vec::with_capacity(slots);
    for i in 0..slots {
        rounds.push(resolve_slot(i + 1, team_a.get(i), team_b.get(i), jitter));
    }

    let wins_a = rounds.iter().filter(|r| r.winner == RoundWinner::A).count();
    let wins_b = rounds.iter().filter(|r| r.winner == RoundWinner::B).count();

    let outcome = if wins_a > wins_b {
        BattleVerdict::Victory(TeamSlot::A)
    } else if wins_b > wins_a {
        BattleVerdict::Victory(TeamSlot::B)
    } else {
        BattleVerdict::NoDecision
    };

    tracing::info!(
        "Battle over {} slots: A {} - B {} ({})",
        slots,
        wins_a,
        wins_b,
        outcome
    );

    BattleResult {
        rounds,
        wins_a,
        wins_b,
        outcome,
        verdict: outcome.to_string(),
    }
}
