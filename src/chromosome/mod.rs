//! # Chromosome
//!
//! A `Chromosome` holds one 8-bit value per named trait. It is an immutable value:
//! crossover and replication always return a new chromosome and never touch the
//! parents.
//!
//! ## Example
//!
//! ```rust
//! use chromosomes::{ChromosomeBuilder, GeneticError};
//! use chromosomes::rng::RandomNumberGenerator;
//!
//! let builder = ChromosomeBuilder::new()
//!     .with_trait("a")?
//!     .with_trait("b")?
//!     .with_mutation_chance(0.0)?;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1401);
//! let parent1 = builder.build_random(&mut rng);
//! let parent2 = builder.build_random(&mut rng);
//! let child = parent1.crossover(&parent2, &mut rng)?;
//!
//! assert_eq!(child.len(), 16);
//! assert!(child.get("a").is_ok());
//! assert!(matches!(child.get("z"), Err(GeneticError::UnknownTrait(_))));
//! # Ok::<(), GeneticError>(())
//! ```
pub mod builder;
pub mod schema;

use std::fmt;
use std::sync::Arc;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    strategy::{CrossoverPolicy, Mutation},
};

pub use builder::ChromosomeBuilder;
pub use schema::TraitSchema;

/// A fixed set of named 8-bit traits together with the breeding policy it was
/// built with.
///
/// `Clone` is a cheap value copy: the schema and policy are shared. The
/// self-crossover described as "cloning" in GA literature is [`Chromosome::replicate`].
#[derive(Clone)]
pub struct Chromosome {
    schema: Arc<TraitSchema>,
    values: Vec<u8>,
    mutation: Mutation,
    policy: Arc<dyn CrossoverPolicy>,
}

impl Chromosome {
    pub(crate) fn from_parts(
        schema: Arc<TraitSchema>,
        values: Vec<u8>,
        mutation: Mutation,
        policy: Arc<dyn CrossoverPolicy>,
    ) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self {
            schema,
            values,
            mutation,
            policy,
        }
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTrait` if `name` is not part of this chromosome's schema.
    pub fn get(&self, name: &str) -> Result<u8> {
        self.schema
            .position(name)
            .map(|position| self.values[position])
            .ok_or_else(|| GeneticError::UnknownTrait(name.to_string()))
    }

    /// Total number of bits, eight per trait.
    pub fn len(&self) -> usize {
        self.values.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hamming distance between the two chromosomes: the number of differing bits
    /// summed over all traits. The distance is symmetric and zero for chromosomes
    /// without traits.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleChromosome` if the trait sets differ.
    pub fn difference(&self, other: &Chromosome) -> Result<u32> {
        self.schema.ensure_compatible(&other.schema)?;

        if Arc::ptr_eq(&self.schema, &other.schema)
            || self.schema.names() == other.schema.names()
        {
            return Ok(self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| (a ^ b).count_ones())
                .sum());
        }

        let mut distance = 0;
        for (name, value) in self.traits() {
            distance += (value ^ other.get(name)?).count_ones();
        }
        Ok(distance)
    }

    /// Breeds a child with `other` using this chromosome's crossover policy.
    pub fn crossover(
        &self,
        other: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        self.policy.crossover(self, other, rng)
    }

    /// Crosses this chromosome with itself. Recombination keeps every bit, but
    /// mutation still applies, so the result may differ from `self`.
    pub fn replicate(&self, rng: &mut RandomNumberGenerator) -> Result<Chromosome> {
        self.crossover(self, rng)
    }

    /// Builds a sibling holding `values` in schema order, sharing this chromosome's
    /// schema, mutation operator and crossover policy. This is how custom policies
    /// assemble their offspring.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the number of values does not match the number of traits.
    pub fn with_values(&self, values: Vec<u8>) -> Result<Chromosome> {
        if values.len() != self.schema.len() {
            return Err(GeneticError::Configuration(format!(
                "Expected {} trait values, got {}",
                self.schema.len(),
                values.len()
            )));
        }
        Ok(Self::from_parts(
            Arc::clone(&self.schema),
            values,
            self.mutation,
            Arc::clone(&self.policy),
        ))
    }

    /// Iterates over `(name, value)` pairs in schema order.
    pub fn traits(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.schema
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn schema(&self) -> &TraitSchema {
        &self.schema
    }

    /// Trait values in schema order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn mutation(&self) -> Mutation {
        self.mutation
    }
}

impl PartialEq for Chromosome {
    /// Chromosomes are equal when they hold the same traits with the same values.
    /// Breeding policies are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.schema.is_compatible(&other.schema)
            && self
                .traits()
                .all(|(name, value)| other.get(name).map_or(false, |v| v == value))
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Traits<'a>(&'a Chromosome);

        impl fmt::Debug for Traits<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.0.traits().map(|(name, value)| (name, format!("{:#04x}", value))))
                    .finish()
            }
        }

        f.debug_struct("Chromosome")
            .field("traits", &Traits(self))
            .field("mutation_chance", &self.mutation.chance())
            .finish()
    }
}
