//! Array buffer generation.

use crate::sort::Height;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Source of fresh random arrays.
///
/// Seeded generators produce the same sequence of arrays on every run.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: StdRng,
    heights: RangeInclusive<Height>,
}

impl ArrayGenerator {
    /// Create a generator drawing heights uniformly from `heights`.
    ///
    /// # Panics
    ///
    /// Panics if `heights` is empty.
    pub fn new(heights: RangeInclusive<Height>, seed: Option<u64>) -> Self {
        assert!(!heights.is_empty(), "height range must not be empty");
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng, heights }
    }

    /// The inclusive height range values are drawn from.
    pub const fn heights(&self) -> &RangeInclusive<Height> {
        &self.heights
    }

    /// Generate `len` heights.
    pub fn generate(&mut self, len: usize) -> Vec<Height> {
        (0..len)
            .map(|_| self.rng.gen_range(self.heights.clone()))
            .collect()
    }

    /// Overwrite `values` in place with fresh heights.
    pub fn refill(&mut self, values: &mut [Height]) {
        for value in values {
            *value = self.rng.gen_range(self.heights.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_within_bounds() {
        let mut generator = ArrayGenerator::new(20..=490, Some(1));
        let values = generator.generate(500);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (20..=490).contains(v)));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = ArrayGenerator::new(0..=1000, Some(42));
        let mut b = ArrayGenerator::new(0..=1000, Some(42));
        assert_eq!(a.generate(80), b.generate(80));
    }

    #[test]
    fn test_refill_keeps_length() {
        let mut generator = ArrayGenerator::new(5..=5, Some(3));
        let mut values = vec![0; 12];
        generator.refill(&mut values);
        assert_eq!(values, vec![5; 12]);
    }

    #[test]
    #[should_panic]
    fn test_empty_range_panics() {
        #[allow(clippy::reversed_empty_ranges)]
        let _ = ArrayGenerator::new(10..=1, None);
    }
}
