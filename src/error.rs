//! # Error Types
//!
//! This module defines the error type shared by every operation in the crate.
//! All variants describe programmer or configuration misuse: they are returned
//! immediately to the caller and never retried internally.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use chromosomes::error::{GeneticError, Result};
//!
//! fn check_chance(chance: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&chance) {
//!         return Err(GeneticError::Configuration(format!(
//!             "Mutation chance must be within [0, 1], got {}",
//!             chance
//!         )));
//!     }
//!     Ok(chance)
//! }
//!
//! assert!(check_chance(0.5).is_ok());
//! assert!(check_chance(1.01).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use chromosomes::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> chromosomes::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building, breeding or selecting chromosomes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A trait name was registered twice in the same schema.
    #[error("Duplicate trait: {0}")]
    DuplicateTrait(String),

    /// An invalid configuration value was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A trait was looked up that is not part of the chromosome's schema.
    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    /// Two chromosomes with different trait sets were combined or compared.
    #[error("Incompatible chromosomes: traits {left:?} do not match traits {right:?}")]
    IncompatibleChromosome {
        /// Sorted trait names of the left-hand chromosome.
        left: Vec<String>,
        /// Sorted trait names of the right-hand chromosome.
        right: Vec<String>,
    },

    /// Selection was asked to pick from an empty candidate set.
    #[error("Empty population error: Cannot select from an empty candidate set")]
    EmptyPopulation,
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
