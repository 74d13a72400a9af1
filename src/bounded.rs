//! # Bounded real-function optimization
//!
//! Maximizes real functions of one, two or three variables over an integer
//! interval `[min, max]`. Each variable is a trait (`"X"`, `"Y"`, `"Z"`) whose byte
//! is decoded with [`rescale`]: `0` maps to `min`, `255` maps to `max`, linearly in
//! between. The interval is therefore sampled on a grid of 256 points per axis.
//!
//! ## Example
//!
//! ```rust
//! use chromosomes::bounded::{bounded_maximize, rescale};
//! use chromosomes::rng::RandomNumberGenerator;
//!
//! assert_eq!(rescale(0, -10, 10), -10.0);
//! assert_eq!(rescale(255, -10, 10), 10.0);
//!
//! let mut rng = RandomNumberGenerator::from_seed(2024);
//! let x = bounded_maximize(|x| -(x - 3.0).abs(), -10, 10, &mut rng)?;
//! assert!((-10.0..=10.0).contains(&x));
//! # Ok::<(), chromosomes::GeneticError>(())
//! ```

use crate::{
    chromosome::{Chromosome, ChromosomeBuilder},
    error::{GeneticError, Result},
    evolution::{Challenge, Optimizer, OptimizerOptions},
    rng::RandomNumberGenerator,
    strategy::Mutation,
};

/// Trait holding the first variable.
pub const X: &str = "X";
/// Trait holding the second variable.
pub const Y: &str = "Y";
/// Trait holding the third variable.
pub const Z: &str = "Z";

/// Maps a trait byte onto `[min, max]` as `min + (value / 255) * (max - min)`.
pub fn rescale(value: u8, min: i32, max: i32) -> f64 {
    let min = f64::from(min);
    let max = f64::from(max);
    min + (f64::from(value) / 255.0) * (max - min)
}

fn decode(chromosome: &Chromosome, name: &str, min: i32, max: i32) -> Option<f64> {
    chromosome.get(name).ok().map(|value| rescale(value, min, max))
}

/// Wraps `f(x)` as a challenge over trait `"X"`.
///
/// Chromosomes lacking a required trait score NaN, which never wins selection.
#[derive(Debug, Clone)]
pub struct BoundedFitness1d<F> {
    function: F,
    min: i32,
    max: i32,
}

impl<F> BoundedFitness1d<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(function: F, min: i32, max: i32) -> Self {
        Self { function, min, max }
    }
}

impl<F> Challenge for BoundedFitness1d<F>
where
    F: Fn(f64) -> f64,
{
    fn score(&self, chromosome: &Chromosome) -> f64 {
        decode(chromosome, X, self.min, self.max)
            .map(|x| (self.function)(x))
            .unwrap_or(f64::NAN)
    }
}

/// Wraps `f(x, y)` as a challenge over traits `"X"` and `"Y"`.
#[derive(Debug, Clone)]
pub struct BoundedFitness2d<F> {
    function: F,
    min: i32,
    max: i32,
}

impl<F> BoundedFitness2d<F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(function: F, min: i32, max: i32) -> Self {
        Self { function, min, max }
    }
}

impl<F> Challenge for BoundedFitness2d<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn score(&self, chromosome: &Chromosome) -> f64 {
        let x = decode(chromosome, X, self.min, self.max);
        let y = decode(chromosome, Y, self.min, self.max);
        match (x, y) {
            (Some(x), Some(y)) => (self.function)(x, y),
            _ => f64::NAN,
        }
    }
}

/// Wraps `f(x, y, z)` as a challenge over traits `"X"`, `"Y"` and `"Z"`.
#[derive(Debug, Clone)]
pub struct BoundedFitness3d<F> {
    function: F,
    min: i32,
    max: i32,
}

impl<F> BoundedFitness3d<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    pub fn new(function: F, min: i32, max: i32) -> Self {
        Self { function, min, max }
    }
}

impl<F> Challenge for BoundedFitness3d<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn score(&self, chromosome: &Chromosome) -> f64 {
        let x = decode(chromosome, X, self.min, self.max);
        let y = decode(chromosome, Y, self.min, self.max);
        let z = decode(chromosome, Z, self.min, self.max);
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => (self.function)(x, y, z),
            _ => f64::NAN,
        }
    }
}

/// Runs the optimizer on bounded real functions with configurable options.
#[derive(Debug, Clone)]
pub struct BoundedMaximizer {
    min: i32,
    max: i32,
    options: OptimizerOptions,
    mutation: Mutation,
}

impl BoundedMaximizer {
    /// Creates a maximizer over `[min, max]` with default optimizer options and
    /// the default mutation chance.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(GeneticError::Configuration(format!(
                "Lower bound {} exceeds upper bound {}",
                min, max
            )));
        }
        Ok(Self {
            min,
            max,
            options: OptimizerOptions::default(),
            mutation: Mutation::default(),
        })
    }

    /// # Errors
    ///
    /// Returns `Configuration` if the options fail validation.
    pub fn with_options(mut self, options: OptimizerOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `Configuration` if `chance` is outside `[0, 1]`.
    pub fn with_mutation_chance(mut self, chance: f64) -> Result<Self> {
        self.mutation = Mutation::new(chance)?;
        Ok(self)
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn maximize<F>(&self, function: F, rng: &mut RandomNumberGenerator) -> Result<f64>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let challenge = BoundedFitness1d::new(function, self.min, self.max);
        let best = self.run(challenge, &[X], rng)?;
        self.decode_trait(&best, X)
    }

    pub fn maximize_2d<F>(
        &self,
        function: F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(f64, f64)>
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let challenge = BoundedFitness2d::new(function, self.min, self.max);
        let best = self.run(challenge, &[X, Y], rng)?;
        Ok((self.decode_trait(&best, X)?, self.decode_trait(&best, Y)?))
    }

    pub fn maximize_3d<F>(
        &self,
        function: F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(f64, f64, f64)>
    where
        F: Fn(f64, f64, f64) -> f64 + Sync,
    {
        let challenge = BoundedFitness3d::new(function, self.min, self.max);
        let best = self.run(challenge, &[X, Y, Z], rng)?;
        Ok((
            self.decode_trait(&best, X)?,
            self.decode_trait(&best, Y)?,
            self.decode_trait(&best, Z)?,
        ))
    }

    fn run<C>(
        &self,
        challenge: C,
        axes: &[&str],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome>
    where
        C: Challenge + Sync,
    {
        let mut builder = ChromosomeBuilder::new();
        for axis in axes {
            builder.add_trait(axis)?;
        }
        builder.set_mutation_chance(self.mutation.chance())?;

        let optimizer = Optimizer::with_options(challenge, self.options.clone())?;
        Ok(optimizer.evolve(&builder, rng)?.chromosome)
    }

    fn decode_trait(&self, chromosome: &Chromosome, name: &str) -> Result<f64> {
        Ok(rescale(chromosome.get(name)?, self.min, self.max))
    }
}

/// Maximizes `f(x)` over `[min, max]` with default options.
pub fn bounded_maximize<F>(
    function: F,
    min: i32,
    max: i32,
    rng: &mut RandomNumberGenerator,
) -> Result<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    BoundedMaximizer::new(min, max)?.maximize(function, rng)
}

/// Maximizes `f(x, y)` over `[min, max]²` with default options.
pub fn bounded_maximize_2d<F>(
    function: F,
    min: i32,
    max: i32,
    rng: &mut RandomNumberGenerator,
) -> Result<(f64, f64)>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    BoundedMaximizer::new(min, max)?.maximize_2d(function, rng)
}

/// Maximizes `f(x, y, z)` over `[min, max]³` with default options.
pub fn bounded_maximize_3d<F>(
    function: F,
    min: i32,
    max: i32,
    rng: &mut RandomNumberGenerator,
) -> Result<(f64, f64, f64)>
where
    F: Fn(f64, f64, f64) -> f64 + Sync,
{
    BoundedMaximizer::new(min, max)?.maximize_3d(function, rng)
}
