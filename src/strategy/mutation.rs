use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Per-trait byte mutation.
///
/// Each trait byte independently mutates with probability `chance`. A mutation
/// XORs the byte with a freshly drawn random byte, so any subset of its eight bits
/// may flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutation {
    chance: f64,
}

impl Mutation {
    /// The chance used when none is configured.
    pub const DEFAULT_CHANCE: f64 = 1e-5;

    /// Creates a mutation operator firing with probability `chance`.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `chance` is outside `[0, 1]` or is NaN.
    pub fn new(chance: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(GeneticError::Configuration(format!(
                "Mutation chance must be within [0, 1], got {}",
                chance
            )));
        }
        Ok(Self { chance })
    }

    /// Returns a mutation operator that never fires.
    pub fn disabled() -> Self {
        Self { chance: 0.0 }
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }

    /// Applies one Bernoulli trial to `byte`.
    ///
    /// With a zero chance no random number is drawn at all.
    pub fn apply(&self, byte: u8, rng: &mut RandomNumberGenerator) -> u8 {
        if self.chance <= 0.0 {
            return byte;
        }
        if rng.fetch_unit() < self.chance {
            byte ^ rng.fetch_byte()
        } else {
            byte
        }
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self {
            chance: Self::DEFAULT_CHANCE,
        }
    }
}
