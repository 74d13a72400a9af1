use super::CrossoverPolicy;
use crate::{chromosome::Chromosome, error::Result, rng::RandomNumberGenerator};

/// # UniformCrossover
///
/// Bit-level uniform crossover. For every trait a fresh random byte mask `m` is
/// drawn and the child byte is `(first & m) | (second & !m)`, so each bit comes
/// from either parent with probability one half. The first parent's mutation
/// operator is then applied to the combined byte.
///
/// Traits are visited in the first parent's schema order. The second parent may
/// list the same traits in another order; values are matched by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverPolicy for UniformCrossover {
    fn crossover(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        first.schema().ensure_compatible(second.schema())?;

        let mutation = first.mutation();
        let mut values = Vec::with_capacity(first.values().len());

        for (name, this) in first.traits() {
            let that = second.get(name)?;
            let mask = rng.fetch_byte();
            let combined = (this & mask) | (that & !mask);
            values.push(mutation.apply(combined, rng));
        }

        first.with_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::ChromosomeBuilder;
    use crate::error::GeneticError;

    fn builder(names: &[&str], chance: f64) -> ChromosomeBuilder {
        let mut builder = ChromosomeBuilder::new();
        for name in names {
            builder.add_trait(name).unwrap();
        }
        builder.set_mutation_chance(chance).unwrap();
        builder
    }

    #[test]
    fn test_child_bits_come_from_a_parent() {
        let builder = builder(&["a", "b", "c"], 0.0);
        let mut rng = RandomNumberGenerator::from_seed(21);

        let first = builder.build_from(&[0b1111_0000, 0x00, 0xAA]).unwrap();
        let second = builder.build_from(&[0b0000_1111, 0xFF, 0xAA]).unwrap();

        for _ in 0..50 {
            let child = UniformCrossover.crossover(&first, &second, &mut rng).unwrap();
            // Where the parents agree, the child must agree with them.
            assert_eq!(child.get("c").unwrap(), 0xAA);
            for name in ["a", "b"] {
                let value = child.get(name).unwrap();
                let f = first.get(name).unwrap();
                let s = second.get(name).unwrap();
                assert_eq!(value & !(f | s), 0);
                assert_eq!(!value & (f & s), 0);
            }
        }
    }

    #[test]
    fn test_masks_are_drawn_per_trait() {
        let builder = builder(&["a", "b"], 0.0);
        let first = builder.build_from(&[0xFF, 0xFF]).unwrap();
        let second = builder.build_from(&[0x00, 0x00]).unwrap();

        let mut rng = RandomNumberGenerator::from_seed(99);
        let mut replay = rng.clone();

        let child = UniformCrossover.crossover(&first, &second, &mut rng).unwrap();

        // With an all-ones and an all-zeros parent the child is the mask itself.
        assert_eq!(child.get("a").unwrap(), replay.fetch_byte());
        assert_eq!(child.get("b").unwrap(), replay.fetch_byte());
    }

    #[test]
    fn test_second_parent_order_does_not_matter() {
        let forward = builder(&["x", "y"], 0.0);
        let backward = builder(&["y", "x"], 0.0);

        let first = forward.build_from(&[0xFF, 0xFF]).unwrap();
        let second = backward.build_from(&[0xFF, 0xFF]).unwrap();

        let mut rng = RandomNumberGenerator::from_seed(4);
        let child = UniformCrossover.crossover(&first, &second, &mut rng).unwrap();

        assert_eq!(child.get("x").unwrap(), 0xFF);
        assert_eq!(child.get("y").unwrap(), 0xFF);
        assert_eq!(child.schema().names(), first.schema().names());
    }

    #[test]
    fn test_incompatible_parents_rejected() {
        let first = builder(&["a"], 0.0).build_from(&[1]).unwrap();
        let second = builder(&["b"], 0.0).build_from(&[1]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = UniformCrossover.crossover(&first, &second, &mut rng);
        assert!(matches!(
            result,
            Err(GeneticError::IncompatibleChromosome { .. })
        ));
    }
}
