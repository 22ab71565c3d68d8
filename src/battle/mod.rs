//! Battle system - slot-paired roster fights with power scores and jitter
//!
//! Deterministic given the jitter source: swap in [`FixedJitter`] to replay
//! an exact fight, or [`RngJitter`] over a seeded RNG for variance.

pub mod constants;
pub mod jitter;
pub mod power;
pub mod resolver;

pub use jitter::{FixedJitter, JitterSource, RngJitter};
pub use power::power_score;
pub use resolver::{resolve_battle, BattleResult, BattleRound, BattleVerdict, RoundWinner};
