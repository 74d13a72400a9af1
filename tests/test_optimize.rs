use chromosomes::{
    error::GeneticError,
    evolution::{optimize, LogLevel, Optimizer, OptimizerOptions},
    rng::RandomNumberGenerator,
    Chromosome, ChromosomeBuilder,
};
use std::sync::atomic::{AtomicUsize, Ordering};

const GENE1: &str = "gene1";
const GENE2: &str = "gene2";
const GENE3: &str = "gene3";

fn most_ones_fitness(chromosome: &Chromosome) -> f64 {
    [GENE1, GENE2, GENE3]
        .iter()
        .map(|gene| f64::from(chromosome.get(gene).unwrap()))
        .sum()
}

fn sum_leading_zeros(chromosome: &Chromosome) -> f64 {
    [GENE1, GENE2, GENE3]
        .iter()
        .map(|gene| f64::from(chromosome.get(gene).unwrap().leading_zeros()))
        .sum()
}

fn three_gene_builder() -> ChromosomeBuilder {
    let mut builder = ChromosomeBuilder::new();
    builder.set_mutation_chance(0.15).unwrap();
    builder.add_trait(GENE1).unwrap();
    builder.add_trait(GENE2).unwrap();
    builder.add_trait(GENE3).unwrap();
    builder
}

fn assert_optimize_improves(fitness: fn(&Chromosome) -> f64) {
    let builder = three_gene_builder();

    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let random = builder.build_random(&mut rng);
        let result = optimize(fitness, &builder, &mut rng).unwrap();

        assert!(
            fitness(&result) >= fitness(&random),
            "seed {}: optimized {:?} scored below random {:?}",
            seed,
            result,
            random
        );
    }
}

#[test]
fn test_optimize_improves_chromosome_from_random() {
    assert_optimize_improves(most_ones_fitness);
}

#[test]
fn test_optimize_improves_chromosome_from_random_leading_zeros() {
    assert_optimize_improves(sum_leading_zeros);
}

#[test]
fn test_optimize_beats_initial_pool() {
    let builder = three_gene_builder();
    let options = OptimizerOptions::default();

    let mut rng = RandomNumberGenerator::from_seed(2718);
    let result = Optimizer::new(most_ones_fitness)
        .evolve(&builder, &mut rng)
        .unwrap();

    // The first history entry is the best of the initial random pool.
    assert_eq!(result.history.len(), options.get_num_generations());
    assert!(result.score >= result.history[0]);
    assert!(result.history.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_optimization_is_reproducible() {
    let builder = three_gene_builder();
    let optimizer = Optimizer::new(most_ones_fitness);

    let first = optimizer
        .evolve(&builder, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();
    let second = optimizer
        .evolve(&builder, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_optimize_with_zero_population() {
    let options = OptimizerOptions::new(10, LogLevel::None, 0);
    let optimizer = Optimizer::with_options(most_ones_fitness, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(0);

    let result = optimizer.evolve(&three_gene_builder(), &mut rng);
    assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
}

#[test]
fn test_optimize_with_closure_challenge() {
    let evaluations = AtomicUsize::new(0);
    let challenge = |chromosome: &Chromosome| {
        evaluations.fetch_add(1, Ordering::SeqCst);
        -most_ones_fitness(chromosome)
    };

    let options = OptimizerOptions::builder().num_generations(5).build();
    let optimizer = Optimizer::with_options(challenge, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(8);
    let result = optimizer.evolve(&three_gene_builder(), &mut rng).unwrap();

    // Minimizing the sum by maximizing its negation.
    assert!(result.score <= 0.0);
    assert!(evaluations.load(Ordering::SeqCst) >= 8 + 5 * 2);
}

#[test]
fn test_verbose_logging_run() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let options = OptimizerOptions::builder()
        .num_generations(3)
        .log_level(LogLevel::Verbose)
        .build();
    let optimizer = Optimizer::with_options(most_ones_fitness, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let result = optimizer.evolve(&three_gene_builder(), &mut rng).unwrap();
    assert_eq!(result.history.len(), 3);
}

#[test]
fn test_each_generation_adds_exactly_the_immigrants() {
    let evaluations = AtomicUsize::new(0);
    // A flat landscape: nothing scores above the mean, so nothing is bred and
    // every evaluation after the initial pool is an immigrant.
    let flat = |_: &Chromosome| {
        evaluations.fetch_add(1, Ordering::SeqCst);
        1.0
    };

    let options = OptimizerOptions::builder()
        .num_generations(5)
        .population_size(8)
        .num_immigrants(3)
        .build();
    let optimizer = Optimizer::with_options(flat, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(12);
    let result = optimizer.evolve(&three_gene_builder(), &mut rng).unwrap();

    assert_eq!(evaluations.load(Ordering::SeqCst), 8 + 5 * 3);
    assert_eq!(result.history, vec![1.0; 5]);
}
