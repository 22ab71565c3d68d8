//! Battle constants - all tunable values in one place

// Per-slot random swing applied to each side's score, in either direction
pub const JITTER_MAGNITUDE: f64 = 10.0;

// Power score weights (offense-leaning, bulk counts less)
pub const ATTACK_WEIGHT: f64 = 1.2;
pub const SPECIAL_ATTACK_WEIGHT: f64 = 1.1;
pub const SPEED_WEIGHT: f64 = 1.0;
pub const DEFENSE_WEIGHT: f64 = 0.9;
pub const SPECIAL_DEFENSE_WEIGHT: f64 = 0.9;
pub const HP_WEIGHT: f64 = 0.6;
