//! # CrossoverPolicy
//!
//! The `CrossoverPolicy` trait defines how a child chromosome is produced from two
//! parents. Every chromosome holds the policy it was built with and hands it down
//! to its children, so a whole lineage breeds the same way.
//!
//! The default policy is [`UniformCrossover`], which mixes the parents bit by bit
//! and then applies the parent's [`Mutation`] operator. Any closure with the
//! matching signature is a policy too, which makes custom experiments cheap:
//!
//! ```rust
//! use chromosomes::{Chromosome, ChromosomeBuilder, Result};
//! use chromosomes::rng::RandomNumberGenerator;
//!
//! // A policy that always keeps the first parent unchanged.
//! let builder = ChromosomeBuilder::new()
//!     .with_trait("a")?
//!     .with_crossover_fn(|first: &Chromosome, _second: &Chromosome, _rng: &mut RandomNumberGenerator| {
//!         Ok(first.clone())
//!     });
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let parent1 = builder.build_random(&mut rng);
//! let parent2 = builder.build_random(&mut rng);
//! let child = parent1.crossover(&parent2, &mut rng)?;
//!
//! assert_eq!(child, parent1);
//! # Ok::<(), chromosomes::GeneticError>(())
//! ```
pub mod mutation;
pub mod uniform;

use crate::{chromosome::Chromosome, error::Result, rng::RandomNumberGenerator};

/// # CrossoverPolicy
///
/// Produces a new chromosome from two parents. Implementations must not modify the
/// parents; crossover always yields a fresh value.
pub trait CrossoverPolicy: Send + Sync {
    /// Breeds a child from `first` and `second`.
    ///
    /// ## Errors
    ///
    /// Implementations return `IncompatibleChromosome` when the parents do not
    /// share a trait set, or any error raised while assembling the child.
    fn crossover(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome>;
}

impl<F> CrossoverPolicy for F
where
    F: Fn(&Chromosome, &Chromosome, &mut RandomNumberGenerator) -> Result<Chromosome>
        + Send
        + Sync,
{
    fn crossover(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        self(first, second, rng)
    }
}

pub use mutation::Mutation;
pub use uniform::UniformCrossover;
