//! Injectable randomness for the computer opponent.
//!
//! The opponent never touches a global RNG. It asks a [`RandomSource`] for
//! an index, so production can use a seeded ChaCha stream and tests can
//! script the exact picks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// The same seed always produces the same sequence of opponent moves.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Replays a fixed list of picks, wrapping each into range.
///
/// Once the script runs out it keeps returning 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Creates a source that yields `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.picks.pop_front().map_or(0, |p| p % upper.max(1))
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
            assert_eq!(rng1.pick_index(9), rng2.pick_index(9));
        }
    }

    #[test]
    fn test_picks_stay_in_range() {
        let mut rng = GameRng::new(7);
        for upper in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_scripted_sequence() {
        let mut rng = ScriptedRng::new([2, 10, 1]);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(4), 2);
        assert_eq!(rng.remaining(), 1);
        assert_eq!(rng.pick_index(3), 1);
        assert_eq!(rng.pick_index(3), 0);
    }

    #[test]
    fn test_borrowed_source() {
        let mut rng = ScriptedRng::new([3]);
        let borrowed: &mut dyn RandomSource = &mut rng;
        assert_eq!(borrowed.pick_index(9), 3);
    }
}
