//! Randomness sources for per-slot score jitter

use std::collections::VecDeque;

use rand::Rng;

use crate::battle::constants::JITTER_MAGNITUDE;

/// Supplies one jitter value per side per contested slot
pub trait JitterSource {
    fn next_jitter(&mut self) -> f64;
}

/// Uniform jitter in `[-JITTER_MAGNITUDE, JITTER_MAGNITUDE]` from any RNG
pub struct RngJitter<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RngJitter<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> JitterSource for RngJitter<'_, R> {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen_range(-JITTER_MAGNITUDE..=JITTER_MAGNITUDE)
    }
}

/// Replays a fixed sequence, then yields zero once exhausted
#[derive(Debug, Clone, Default)]
pub struct FixedJitter {
    values: VecDeque<f64>,
}

impl FixedJitter {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// No jitter at all
    pub fn zero() -> Self {
        Self::default()
    }
}

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(0.0)
    }
}
