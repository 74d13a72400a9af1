use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    challenge::Challenge,
    options::{LogLevel, OptimizerOptions},
};
use crate::{
    chromosome::{Chromosome, ChromosomeBuilder},
    error::Result,
    rng::RandomNumberGenerator,
    selection::{above_average_indices, most_fit_index},
};

/// The outcome of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The fittest chromosome of the final pool.
    pub chromosome: Chromosome,
    /// The fitness score of the chromosome.
    pub score: f64,
    /// The elite score at the start of every generation.
    pub history: Vec<f64>,
}

/// Evolves a bounded pool of chromosomes toward higher scores of a challenge.
///
/// Every generation:
///
/// 1. the fittest chromosome (the elite) is moved to the front of the pool,
/// 2. a pool longer than the maximum size is cut down to the truncated size,
/// 3. a few brand new random chromosomes are appended,
/// 4. the above-average subset of the above-average subset is taken as the
///    refined elite, capped at the base population size,
/// 5. every pair of refined individuals more than one bit apart is crossed,
/// 6. each refined individual overwrites an early slot behind the elite and is
///    crossed with a fresh random chromosome.
///
/// The run always lasts the configured number of generations and then returns the
/// fittest chromosome of the final pool. The elite is never dropped, so the
/// `history` of elite scores never decreases.
///
/// # Example
///
/// ```rust
/// use chromosomes::{Chromosome, ChromosomeBuilder, Optimizer};
/// use chromosomes::rng::RandomNumberGenerator;
///
/// let builder = ChromosomeBuilder::new()
///     .with_trait("a")?
///     .with_trait("b")?
///     .with_mutation_chance(0.15)?;
///
/// let sum = |c: &Chromosome| c.values().iter().map(|&v| f64::from(v)).sum::<f64>();
///
/// let mut rng = RandomNumberGenerator::from_seed(17);
/// let result = Optimizer::new(sum).evolve(&builder, &mut rng)?;
///
/// assert_eq!(result.history.len(), 40);
/// assert!(result.score >= result.history[0]);
/// # Ok::<(), chromosomes::GeneticError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer<Chall>
where
    Chall: Challenge,
{
    challenge: Chall,
    options: OptimizerOptions,
}

impl<Chall> Optimizer<Chall>
where
    Chall: Challenge + Sync,
{
    /// Creates an optimizer with the default options.
    pub fn new(challenge: Chall) -> Self {
        Self {
            challenge,
            options: OptimizerOptions::default(),
        }
    }

    /// Creates an optimizer with custom options.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the options fail validation.
    pub fn with_options(challenge: Chall, options: OptimizerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { challenge, options })
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Runs the optimizer on chromosomes produced by `builder`.
    ///
    /// All randomness is drawn from `rng` in a fixed order, so a seeded generator
    /// makes the run repeatable. Scoring of large batches runs in parallel and does
    /// not touch the generator.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` when the pool is empty (a zero population size),
    /// or any error raised by the builder's crossover policy.
    pub fn evolve(
        &self,
        builder: &ChromosomeBuilder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let options = &self.options;
        let population_size = options.get_population_size();
        let log_level = options.get_log_level();

        debug!(
            traits = builder.schema().len(),
            population_size,
            generations = options.get_num_generations(),
            "starting optimization"
        );

        let mut pool = Pool::new(&self.challenge, options.get_parallel_threshold());
        let initial = (0..population_size)
            .map(|_| builder.build_random(rng))
            .collect();
        pool.extend(initial);

        let mut history = Vec::with_capacity(options.get_num_generations());

        for generation in 0..options.get_num_generations() {
            history.push(pool.promote_elite()?);

            if pool.cap(options.get_max_pool_size(), options.get_truncated_pool_size())
                && log_level == LogLevel::Verbose
            {
                debug!(generation, pool_size = pool.len(), "pool truncated");
            }

            let immigrants = (0..options.get_num_immigrants())
                .map(|_| builder.build_random(rng))
                .collect();
            pool.extend(immigrants);

            let refined = pool.refined_elite(population_size);

            let mut offspring = Vec::new();
            for (i, (first, _)) in refined.iter().enumerate() {
                for (second, _) in &refined[i..] {
                    if first.difference(second)? > 1 {
                        offspring.push(first.crossover(second, rng)?);
                    }
                }
            }

            for (k, (individual, score)) in refined.iter().enumerate() {
                pool.overwrite(k + 1, individual, *score);
                let stranger = builder.build_random(rng);
                offspring.push(individual.crossover(&stranger, rng)?);
            }

            if log_level == LogLevel::Verbose {
                debug!(
                    generation,
                    refined = refined.len(),
                    offspring = offspring.len(),
                    "bred offspring"
                );
            }
            pool.extend(offspring);

            if log_level != LogLevel::None {
                info!(
                    generation,
                    elite_score = history[generation],
                    pool_size = pool.len(),
                    "generation finished"
                );
            }
        }

        let best = most_fit_index(&pool.scores)?;
        let result = EvolutionResult {
            chromosome: pool.members[best].clone(),
            score: pool.scores[best],
            history,
        };

        debug!(score = result.score, "optimization finished");
        Ok(result)
    }
}

/// Runs the optimizer with default options and returns the fittest chromosome.
pub fn optimize<C>(
    challenge: C,
    builder: &ChromosomeBuilder,
    rng: &mut RandomNumberGenerator,
) -> Result<Chromosome>
where
    C: Challenge + Sync,
{
    Optimizer::new(challenge)
        .evolve(builder, rng)
        .map(|result| result.chromosome)
}

/// The working pool of a single run: members and their scores, index-aligned.
struct Pool<'a, C: Challenge + Sync> {
    challenge: &'a C,
    parallel_threshold: usize,
    members: Vec<Chromosome>,
    scores: Vec<f64>,
}

impl<'a, C: Challenge + Sync> Pool<'a, C> {
    fn new(challenge: &'a C, parallel_threshold: usize) -> Self {
        Self {
            challenge,
            parallel_threshold,
            members: Vec::new(),
            scores: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    /// Scores and appends a batch, keeping the batch order.
    fn extend(&mut self, batch: Vec<Chromosome>) {
        let challenge = self.challenge;
        let scores: Vec<f64> = if batch.len() >= self.parallel_threshold {
            batch.par_iter().map(|c| challenge.score(c)).collect()
        } else {
            batch.iter().map(|c| challenge.score(c)).collect()
        };
        self.members.extend(batch);
        self.scores.extend(scores);
    }

    /// Moves the fittest member to slot 0 and returns its score.
    fn promote_elite(&mut self) -> Result<f64> {
        let elite = most_fit_index(&self.scores)?;
        self.members.swap(0, elite);
        self.scores.swap(0, elite);
        Ok(self.scores[0])
    }

    /// Cuts a pool longer than `max` down to `truncated` members, keeping the
    /// front. Returns whether the pool was cut.
    fn cap(&mut self, max: usize, truncated: usize) -> bool {
        if self.members.len() <= max {
            return false;
        }
        self.members.truncate(truncated);
        self.scores.truncate(truncated);
        true
    }

    /// Replaces the member at `slot`; slots past the end are left alone.
    fn overwrite(&mut self, slot: usize, chromosome: &Chromosome, score: f64) {
        if slot < self.members.len() {
            self.members[slot] = chromosome.clone();
            self.scores[slot] = score;
        }
    }

    /// Above-average of the above-average members, in pool order, at most `cap` long.
    fn refined_elite(&self, cap: usize) -> Vec<(Chromosome, f64)> {
        let first = above_average_indices(&self.scores);
        let first_scores: Vec<f64> = first.iter().map(|&i| self.scores[i]).collect();

        above_average_indices(&first_scores)
            .into_iter()
            .take(cap)
            .map(|k| {
                let index = first[k];
                (self.members[index].clone(), self.scores[index])
            })
            .collect()
    }
}
