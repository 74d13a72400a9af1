use std::fmt;
use std::sync::Arc;

use super::{Chromosome, TraitSchema};
use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    strategy::{CrossoverPolicy, Mutation, UniformCrossover},
};

/// Factory for chromosomes that share one schema and breeding policy.
///
/// The builder owns the trait schema, the mutation chance (default `1e-5`) and the
/// crossover policy (default [`UniformCrossover`]). Chromosomes keep a shared
/// reference to the schema they were built from; adding a trait afterwards copies
/// the schema, so existing chromosomes are unaffected.
#[derive(Clone)]
pub struct ChromosomeBuilder {
    schema: Arc<TraitSchema>,
    mutation: Mutation,
    policy: Arc<dyn CrossoverPolicy>,
}

impl ChromosomeBuilder {
    pub fn new() -> Self {
        Self {
            schema: Arc::new(TraitSchema::new()),
            mutation: Mutation::default(),
            policy: Arc::new(UniformCrossover),
        }
    }

    /// Registers a new trait.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTrait` if the name is already registered.
    pub fn add_trait(&mut self, name: &str) -> Result<()> {
        if self.schema.contains(name) {
            return Err(GeneticError::DuplicateTrait(name.to_string()));
        }
        Arc::make_mut(&mut self.schema).add(name)
    }

    pub fn with_trait(mut self, name: &str) -> Result<Self> {
        self.add_trait(name)?;
        Ok(self)
    }

    /// Sets the probability that a trait mutates after each crossover.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `chance` is outside `[0, 1]`.
    pub fn set_mutation_chance(&mut self, chance: f64) -> Result<()> {
        self.mutation = Mutation::new(chance)?;
        Ok(())
    }

    pub fn with_mutation_chance(mut self, chance: f64) -> Result<Self> {
        self.set_mutation_chance(chance)?;
        Ok(self)
    }

    /// Replaces the crossover policy handed to every chromosome built afterwards.
    pub fn set_crossover_policy<P>(&mut self, policy: P)
    where
        P: CrossoverPolicy + 'static,
    {
        self.policy = Arc::new(policy);
    }

    pub fn with_crossover_policy<P>(mut self, policy: P) -> Self
    where
        P: CrossoverPolicy + 'static,
    {
        self.set_crossover_policy(policy);
        self
    }

    /// Same as [`ChromosomeBuilder::with_crossover_policy`], but pins the closure
    /// signature so parameter types can be inferred.
    pub fn with_crossover_fn<F>(self, policy: F) -> Self
    where
        F: Fn(&Chromosome, &Chromosome, &mut RandomNumberGenerator) -> Result<Chromosome>
            + Send
            + Sync
            + 'static,
    {
        self.with_crossover_policy(policy)
    }

    /// Builds a chromosome whose every trait is a uniformly random byte, drawn in
    /// schema order.
    pub fn build_random(&self, rng: &mut RandomNumberGenerator) -> Chromosome {
        let values = (0..self.schema.len()).map(|_| rng.fetch_byte()).collect();
        self.assemble(values)
    }

    /// Builds a random chromosome from a dedicated generator seeded with `seed`.
    pub fn build_seeded(&self, seed: u64) -> Chromosome {
        self.build_random(&mut RandomNumberGenerator::from_seed(seed))
    }

    /// Builds a chromosome from explicit values given in schema order.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the number of values does not match the number of traits.
    pub fn build_from(&self, values: &[u8]) -> Result<Chromosome> {
        if values.len() != self.schema.len() {
            return Err(GeneticError::Configuration(format!(
                "Expected {} trait values, got {}",
                self.schema.len(),
                values.len()
            )));
        }
        Ok(self.assemble(values.to_vec()))
    }

    pub fn schema(&self) -> &TraitSchema {
        &self.schema
    }

    pub fn mutation(&self) -> Mutation {
        self.mutation
    }

    fn assemble(&self, values: Vec<u8>) -> Chromosome {
        Chromosome::from_parts(
            Arc::clone(&self.schema),
            values,
            self.mutation,
            Arc::clone(&self.policy),
        )
    }
}

impl Default for ChromosomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChromosomeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChromosomeBuilder")
            .field("traits", &self.schema.names())
            .field("mutation_chance", &self.mutation.chance())
            .finish()
    }
}
