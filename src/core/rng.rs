//! Randomness provider used by every random draw in a raid.
//!
//! All combat and selection code takes `&mut impl RandomSource` instead of
//! reaching for a process-wide generator. Any `rand::Rng` works out of the
//! box, so callers pass `rand::thread_rng()` in production and a seeded
//! `ChaCha8Rng` (or a scripted source) in tests and the simulator.

use rand::seq::index;
use rand::Rng;

pub trait RandomSource {
    /// Uniform float in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[low, high]`. Returns `low` when `high < low`.
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// `amount` distinct indices drawn from `0..len` without replacement.
    /// `amount` is clamped to `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.uniform(0.0, 1.0) < p
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }

    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(self, len, amount.min(len)).into_vec()
    }
}

/// Deterministic source replaying a fixed list of unit fractions in `[0, 1)`.
///
/// Each draw consumes the next fraction (wrapping around) and scales it to
/// the requested range. Samples take the first `amount` indices in order.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    fractions: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    pub fn new(fractions: Vec<f64>) -> Self {
        Self { fractions, next: 0 }
    }

    /// Every draw lands on the low end of its range.
    pub fn lowest() -> Self {
        Self::new(vec![0.0])
    }

    fn next_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return 0.0;
        }
        let f = self.fractions[self.next % self.fractions.len()];
        self.next += 1;
        f.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let f = self.next_fraction();
        if high <= low {
            return low;
        }
        low + f * (high - low)
    }

    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        let f = self.next_fraction();
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        (low + (f * span) as usize).min(high)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}
