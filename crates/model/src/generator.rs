use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Batch;

/// Endless source of random integer arrays.
///
/// Array lengths are drawn from `0..=max_len` so empty and single-element
/// arrays show up regularly; values are drawn from `-max_value..=max_value`.
pub struct BatchGenerator {
    rng: SmallRng,
    max_len: usize,
    max_value: i64,
}

impl BatchGenerator {
    pub const DEFAULT_MAX_LEN: usize = 1_000;
    pub const DEFAULT_MAX_VALUE: i64 = 1_000_000;

    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        BatchGenerator {
            rng,
            max_len: Self::DEFAULT_MAX_LEN,
            max_value: Self::DEFAULT_MAX_VALUE,
        }
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value.saturating_abs();
        self
    }

    /// Draws `arrays` random arrays.
    pub fn batch(&mut self, arrays: usize) -> Batch {
        self.take(arrays).collect()
    }
}

impl Default for BatchGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for BatchGenerator {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.rng.random_range(0..=self.max_len);
        let bound = self.max_value;
        let array = (0..len)
            .map(|_| self.rng.random_range(-bound..=bound))
            .collect();
        Some(array)
    }
}
