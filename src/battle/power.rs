use crate::battle::constants::*;
use crate::catalog::BaseStats;

/// Baseline combat strength: fixed linear weighting of the six stats
pub fn power_score(stats: &BaseStats) -> f64 {
    stats.attack as f64 * ATTACK_WEIGHT
        + stats.special_attack as f64 * SPECIAL_ATTACK_WEIGHT
        + stats.speed as f64 * SPEED_WEIGHT
        + stats.defense as f64 * DEFENSE_WEIGHT
        + stats.special_defense as f64 * SPECIAL_DEFENSE_WEIGHT
        + stats.hp as f64 * HP_WEIGHT
}
