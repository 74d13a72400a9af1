pub mod bounded;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, ChromosomeBuilder, TraitSchema};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{optimize, Challenge, EvolutionResult, LogLevel, Optimizer, OptimizerOptions};
pub use strategy::{CrossoverPolicy, Mutation, UniformCrossover};
