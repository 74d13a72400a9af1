use crate::chromosome::Chromosome;

/// A fitness function: higher scores are better.
///
/// Any `Fn(&Chromosome) -> f64` closure is a challenge.
pub trait Challenge {
    fn score(&self, chromosome: &Chromosome) -> f64;
}

impl<F> Challenge for F
where
    F: Fn(&Chromosome) -> f64,
{
    fn score(&self, chromosome: &Chromosome) -> f64 {
        self(chromosome)
    }
}
