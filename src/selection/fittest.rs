use crate::chromosome::Chromosome;
use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::Challenge;

/// Returns the candidate with the strictly greatest score.
///
/// Ties keep the earliest candidate. NaN scores never win against a real score.
///
/// # Examples
///
/// ```
/// use chromosomes::{Chromosome, ChromosomeBuilder};
/// use chromosomes::selection::most_fit;
///
/// let builder = ChromosomeBuilder::new().with_trait("X")?;
/// let candidates = vec![
///     builder.build_from(&[0x10])?,
///     builder.build_from(&[0xFF])?,
///     builder.build_from(&[0x7F])?,
/// ];
///
/// let fitness = |c: &Chromosome| c.get("X").map(f64::from).unwrap_or(0.0);
/// let winner = most_fit(&fitness, &candidates)?;
///
/// assert_eq!(winner.get("X")?, 0xFF);
/// # Ok::<(), chromosomes::GeneticError>(())
/// ```
///
/// # Errors
///
/// Returns `EmptyPopulation` if `candidates` is empty.
pub fn most_fit<C>(challenge: &C, candidates: &[Chromosome]) -> Result<Chromosome>
where
    C: Challenge + ?Sized,
{
    let scores: Vec<f64> = candidates.iter().map(|c| challenge.score(c)).collect();
    let index = most_fit_index(&scores)?;
    Ok(candidates[index].clone())
}

/// Index of the strictly greatest score, earliest on ties.
///
/// # Errors
///
/// Returns `EmptyPopulation` if `scores` is empty.
pub fn most_fit_index(scores: &[f64]) -> Result<usize> {
    let mut best = scores
        .first()
        .map(|_| (0, f64::NEG_INFINITY))
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

    for (index, &score) in scores.iter().enumerate() {
        if score > best.1 {
            best = (index, score);
        }
    }
    Ok(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::ChromosomeBuilder;

    fn value_of_x(chromosome: &Chromosome) -> f64 {
        f64::from(chromosome.get("X").unwrap())
    }

    #[test]
    fn test_most_fit_picks_maximum() {
        let builder = ChromosomeBuilder::new().with_trait("X").unwrap();
        let candidates: Vec<Chromosome> = [0x10, 0x7F, 0xFF]
            .iter()
            .map(|&v| builder.build_from(&[v]).unwrap())
            .collect();

        let winner = most_fit(&value_of_x, &candidates).unwrap();
        assert_eq!(winner.get("X").unwrap(), 0xFF);
    }

    #[test]
    fn test_most_fit_empty() {
        let candidates: Vec<Chromosome> = Vec::new();
        assert_eq!(
            most_fit(&value_of_x, &candidates),
            Err(GeneticError::EmptyPopulation)
        );
    }

    #[test]
    fn test_ties_keep_earliest() {
        assert_eq!(most_fit_index(&[1.0, 3.0, 3.0, 2.0]).unwrap(), 1);
    }

    #[test]
    fn test_nan_and_negative_infinity() {
        assert_eq!(most_fit_index(&[f64::NAN, 0.5, f64::NAN]).unwrap(), 1);
        assert_eq!(
            most_fit_index(&[f64::NEG_INFINITY, f64::NEG_INFINITY]).unwrap(),
            0
        );
        assert_eq!(most_fit_index(&[f64::NAN]).unwrap(), 0);
    }
}
