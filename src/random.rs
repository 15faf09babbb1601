//! Randomness seam for the level-up mechanic. Injectable so tests can
//! script every roll.

use rand::RngExt;

pub trait RandomSource: Send {
    /// True with probability `p` (0.0 ..= 1.0).
    fn chance(&mut self, p: f64) -> bool;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
    /// Uniform value in `lo..=hi`.
    fn amount_between(&mut self, lo: u32, hi: u32) -> u32;
}

/// OS-seeded thread-local rolls.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn chance(&mut self, p: f64) -> bool {
        rand::rng().random_bool(p)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn amount_between(&mut self, lo: u32, hi: u32) -> u32 {
        rand::rng().random_range(lo..=hi)
    }
}
