//! Random sources for synthgen.
//!
//! Every generator draws through the [`RandomSource`] trait so callers decide
//! whether a run is reproducible:
//!
//! - [`SeededRandom`] is a Park–Miller multiplicative LCG. For a fixed seed the
//!   sequence of draws is bit-for-bit reproducible, provided calls happen in the
//!   same order. It is not cryptographically strong.
//! - [`EntropyRandom`] wraps an OS-seeded `StdRng` for "fresh" output.
//!
//! Each instance owns its state; nothing is shared between instances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Park–Miller modulus (2^31 - 1).
pub const MODULUS: u64 = 2_147_483_647;

/// Park–Miller multiplier (7^5).
pub const MULTIPLIER: u64 = 16_807;

/// A source of uniform draws in `[0, 1)` plus the helpers built on it.
///
/// Only [`RandomSource::next_f64`] is required; every other method is derived
/// from it, so the number of underlying draws per call is fixed and documented.
pub trait RandomSource {
    /// Next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Inclusive integer in `[min, max]`. One draw.
    ///
    /// If `max < min` the bounds are swapped.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let span = (hi as i128 - lo as i128 + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i128;
        (lo as i128 + offset).min(hi as i128) as i64
    }

    /// Uniform float in `[min, max)`. One draw.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Bernoulli trial at `percent` (0-100). One draw.
    fn chance(&mut self, percent: f64) -> bool {
        self.next_f64() * 100.0 < percent
    }

    /// Uniform element of `items`, or `None` when empty. One draw when non-empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(idx.min(items.len() - 1))
    }

    /// New Fisher–Yates permutation of `items`. `len - 1` draws.
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T>
    where
        Self: Sized,
    {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            out.swap(i, j);
        }
        out
    }

    /// Weighted choice by cumulative subtraction. One draw when non-empty.
    ///
    /// Missing weights count as zero. Falls back to the last item when the
    /// weights do not cover the draw (e.g. all zero).
    fn pick_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let total: f64 = (0..items.len())
            .map(|i| weights.get(i).copied().unwrap_or(0.0).max(0.0))
            .sum();
        let mut remaining = self.next_f64() * total;
        for (i, item) in items.iter().enumerate() {
            remaining -= weights.get(i).copied().unwrap_or(0.0).max(0.0);
            if remaining <= 0.0 {
                return Some(item);
            }
        }
        items.last()
    }
}

/// Deterministic Park–Miller generator.
///
/// `state = state * 16807 mod 2147483647`; each draw is `state / 2147483647`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator from a 32-bit seed.
    ///
    /// Seeds are reduced modulo 2^31 - 1; a seed that reduces to zero (which
    /// would lock the generator at zero) is replaced by 1.
    pub fn new(seed: u32) -> Self {
        let state = u64::from(seed) % MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

/// Non-reproducible source backed by an OS-seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct EntropyRandom {
    inner: StdRng,
}

impl EntropyRandom {
    /// Create a freshly seeded source.
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Create a `StdRng`-backed source from a fixed seed (useful in tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
