//! Seedable random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffle
//! - **Injectable**: Games take a `GameRng` instead of reaching for a global
//! - **Entropy-seeded**: Production games use `GameRng::from_entropy()`
//!
//! ```
//! use heart_pairs::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.index_through(35), b.index_through(35));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used to shuffle decks.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from the operating system (or the browser's
    /// crypto source under `wasm`).
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this RNG was created with, if it was seeded explicitly.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw a uniform index in `[0, upper]` (inclusive).
    pub fn index_through(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index_through(1000), rng2.index_through(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index_through(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index_through(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_through_is_inclusive() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let i = rng.index_through(2);
            assert!(i <= 2);
            seen[i] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_zero_upper_bound() {
        let mut rng = GameRng::new(3);
        for _ in 0..10 {
            assert_eq!(rng.index_through(0), 0);
        }
    }

    #[test]
    fn test_seed_tracking() {
        assert_eq!(GameRng::new(9).seed(), Some(9));
        assert_eq!(GameRng::from_entropy().seed(), None);
    }
}
