//! Seedable random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same decks
//! - **Non-mutating shuffle**: `shuffle` copies its input into a pool and
//!   draws from it, leaving the caller's slice untouched
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let cards = vec![1, 2, 3, 4];
//! let shuffled = rng.shuffle(&cards);
//!
//! assert_eq!(cards, vec![1, 2, 3, 4]);
//! assert_eq!(shuffled.len(), 4);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[ceil(min), floor(max)]`.
    ///
    /// Returns `None` when the rounded range is empty.
    pub fn random_int_inclusive(&mut self, min: f64, max: f64) -> Option<i64> {
        let lo = min.ceil();
        let hi = max.floor();
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return None;
        }
        Some(self.inner.gen_range(lo as i64..=hi as i64))
    }

    /// Return a uniformly random permutation of `items`.
    ///
    /// Each step draws an index in `[0, remaining - 1]` through
    /// `random_int_inclusive` and moves that element from the pool of
    /// unplaced elements to the output.
    #[must_use]
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut pool = items.to_vec();
        let mut out = Vec::with_capacity(pool.len());

        while !pool.is_empty() {
            let last = (pool.len() - 1) as f64;
            // Range is never empty while the pool has elements
            let idx = self
                .random_int_inclusive(0.0, last)
                .map_or(0, |i| i as usize);
            out.push(pool.remove(idx));
        }

        out
    }
}
