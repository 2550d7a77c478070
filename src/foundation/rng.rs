//! Uniform random draws behind a seedable interface.
//!
//! Everything procedural in the crate (bursts, fade jitter, ambient layers) draws through
//! [`RandomSource`], so tests can pin batches with [`Rng64::new`] while hosts use
//! [`EntropyRng`].

use rand::{Rng, SeedableRng};

/// Source of uniform `[0, 1)` draws, plus range helpers built on top of it.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on an empty range");
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.index(items.len())]
}

/// Deterministic SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_f64(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// OS-seeded generator for hosts that do not need reproducible batches.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: rand::rngs::StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: rand::rngs::StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }
}

/// Box a seeded [`Rng64`] when `seed` is set, otherwise an [`EntropyRng`].
pub fn source_for_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(Rng64::new(seed)),
        None => Box::new(EntropyRng::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
