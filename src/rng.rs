//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for
//! building, breeding and mutating chromosomes. It is passed explicitly to every
//! operation that needs it, so two runs started from the same seed draw the same
//! sequence and produce identical chromosomes.
//!
//! ## Example
//!
//! ```rust
//! use chromosomes::rng::RandomNumberGenerator;
//!
//! let mut first = RandomNumberGenerator::from_seed(1401);
//! let mut second = RandomNumberGenerator::from_seed(1401);
//!
//! assert_eq!(first.fetch_byte(), second.fetch_byte());
//!
//! let unit = first.fetch_unit();
//! assert!((0.0..1.0).contains(&unit));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the two draws the
/// engine needs: uniform bytes and uniform floats in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniformly distributed byte in `0..=255`.
    pub fn fetch_byte(&mut self) -> u8 {
        self.rng.gen()
    }

    /// Draws a uniformly distributed float in `[0, 1)`.
    pub fn fetch_unit(&mut self) -> f64 {
        self.rng.gen()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
