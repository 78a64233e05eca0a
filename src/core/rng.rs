//! Seedable randomness for decks, targets and puzzles.
//!
//! Every engine owns one [`GameRng`]. Tests and replays build it from a
//! fixed seed; hosts use [`GameRng::from_entropy`] and can read the chosen
//! seed back to reproduce a session.
//!
//! ```
//! use rust_minigames::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(a.seed());
//!
//! let mut left = vec!['A', 'B', 'C', 'D'];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream remembering the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `range`. Panics on an empty range, like `gen_range`.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform value in `[low, high]`, or `low` if the interval is empty.
    pub fn gen_f64_between(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform pick; `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let left: Vec<_> = (0..50).map(|_| a.gen_range_usize(0..1000)).collect();
        let right: Vec<_> = (0..50).map(|_| b.gen_range_usize(0..1000)).collect();
        assert_eq!(left, right);

        let mut c = GameRng::new(43);
        let other: Vec<_> = (0..50).map(|_| c.gen_range_usize(0..1000)).collect();
        assert_ne!(left, other);
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut live = GameRng::from_entropy();
        let mut replay = GameRng::new(live.seed());
        for _ in 0..20 {
            assert_eq!(live.gen_range_usize(0..100), replay.gen_range_usize(0..100));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        rng.shuffle(&mut data);
        assert_ne!(data, (1..=10).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let words = ["FUN", "GAME", "PLAY"];
        assert!(words.contains(rng.choose(&words).unwrap()));

        let empty: [&str; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_f64_between() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.gen_f64_between(30.0, 370.0);
            assert!((30.0..=370.0).contains(&v));
        }
        assert_eq!(rng.gen_f64_between(5.0, 5.0), 5.0);
        assert_eq!(rng.gen_f64_between(9.0, 1.0), 9.0);
    }
}
