//! Injected randomness.
//!
//! Placement never touches a global RNG; callers hand in a
//! [`RandomSource`]. Any `rand` generator works, and [`FixedSequence`]
//! replays canned values for reproducible layouts.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::ScatterError;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Deterministic generator for a given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy, or from `seed` when given.
pub fn seeded_or_entropy(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Result<Self, ScatterError> {
        if values.is_empty() {
            return Err(ScatterError::EmptySequence);
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(ScatterError::UnitOutOfRange(*bad));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Number of values consumed so far (not wrapped).
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedSequence {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sequence_wraps() {
        let mut seq = FixedSequence::new(vec![0.1, 0.5]).expect("sequence");
        assert_eq!(seq.unit(), 0.1);
        assert_eq!(seq.unit(), 0.5);
        assert_eq!(seq.unit(), 0.1);
        assert_eq!(seq.consumed(), 3);
    }

    #[test]
    fn fixed_sequence_rejects_bad_input() {
        assert_eq!(
            FixedSequence::new(vec![]).unwrap_err(),
            ScatterError::EmptySequence
        );
        assert_eq!(
            FixedSequence::new(vec![0.2, 1.0]).unwrap_err(),
            ScatterError::UnitOutOfRange(1.0)
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..16 {
            let (ua, ub) = (a.unit(), b.unit());
            assert_eq!(ua, ub);
            assert!((0.0..1.0).contains(&ua));
        }
    }
}
