//! Working pools of candidate sounds
//!
//! Before a batch, each input pool is shuffled and padded with random
//! duplicates so a single word can reuse sounds when the inventory is smaller
//! than the number of slots. Each word then draws from its own shuffled order.

use crate::core::SoundUnit;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle `pool` and pad it to at least `required` entries
///
/// Padding duplicates are drawn uniformly from the pool as it grows, so an
/// earlier duplicate may itself be duplicated again. An empty pool stays empty.
pub fn prepare<R: Rng + ?Sized>(pool: &[SoundUnit], required: usize, rng: &mut R) -> Vec<SoundUnit> {
    let mut working = pool.to_vec();
    working.shuffle(rng);

    if working.is_empty() {
        return working;
    }

    while working.len() < required {
        let idx = rng.random_range(0..working.len());
        working.push(working[idx].clone());
    }

    working
}

/// Per-word draw order over a working pool
///
/// Yields sounds in a fresh shuffled order; once exhausted, falls back to
/// uniform sampling from the whole pool.
pub struct Draw<'a> {
    pool: &'a [SoundUnit],
    order: Vec<usize>,
}

impl<'a> Draw<'a> {
    /// Start a new draw over `pool`
    ///
    /// # Panics
    /// Panics in debug mode if `pool` is empty.
    pub fn new<R: Rng + ?Sized>(pool: &'a [SoundUnit], rng: &mut R) -> Self {
        debug_assert!(!pool.is_empty(), "cannot draw from an empty pool");
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.shuffle(rng);
        Self { pool, order }
    }

    /// Next candidate sound
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a SoundUnit {
        let idx = self
            .order
            .pop()
            .unwrap_or_else(|| rng.random_range(0..self.pool.len()));
        &self.pool[idx]
    }
}
