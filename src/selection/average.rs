use crate::chromosome::Chromosome;
use crate::evolution::Challenge;

/// Returns, in their original order, the candidates scoring strictly above the
/// mean score. The result is empty for an empty input or when every candidate
/// scores the same.
pub fn above_average<C>(challenge: &C, candidates: &[Chromosome]) -> Vec<Chromosome>
where
    C: Challenge + ?Sized,
{
    let scores: Vec<f64> = candidates.iter().map(|c| challenge.score(c)).collect();
    above_average_indices(&scores)
        .into_iter()
        .map(|index| candidates[index].clone())
        .collect()
}

/// Indices of the scores strictly greater than their arithmetic mean, ascending.
pub fn above_average_indices(scores: &[f64]) -> Vec<usize> {
    if scores.is_empty() {
        return Vec::new();
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score > mean)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::ChromosomeBuilder;

    #[test]
    fn test_above_average_preserves_order() {
        let builder = ChromosomeBuilder::new().with_trait("X").unwrap();
        let candidates: Vec<Chromosome> = [200, 10, 150, 20, 90]
            .iter()
            .map(|&v| builder.build_from(&[v]).unwrap())
            .collect();

        let fitness = |c: &Chromosome| f64::from(c.get("X").unwrap());
        let selected = above_average(&fitness, &candidates);

        // Mean is 94.
        let values: Vec<u8> = selected.iter().map(|c| c.get("X").unwrap()).collect();
        assert_eq!(values, vec![200, 150]);
    }

    #[test]
    fn test_equal_scores_select_nothing() {
        assert!(above_average_indices(&[3.0, 3.0, 3.0]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(above_average_indices(&[]).is_empty());

        let fitness = |_: &Chromosome| 1.0;
        assert!(above_average(&fitness, &[]).is_empty());
    }

    #[test]
    fn test_double_filter_narrows() {
        let scores: Vec<f64> = (1..=16).map(f64::from).collect();
        let first = above_average_indices(&scores);
        let first_scores: Vec<f64> = first.iter().map(|&i| scores[i]).collect();
        let second: Vec<usize> = above_average_indices(&first_scores)
            .into_iter()
            .map(|k| first[k])
            .collect();

        assert_eq!(first, (8..16).collect::<Vec<_>>());
        assert_eq!(second, vec![12, 13, 14, 15]);
    }
}
