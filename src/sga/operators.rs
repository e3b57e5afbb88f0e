//! Binary crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`generate_pairs`]: disjoint random index pairs
//! - [`single_point_crossover`]: swap the tails of two genotypes at a cut point
//! - [`cross_generation`]: pair up a population and keep only the offspring
//!
//! # Mutation
//!
//! - [`mutate`]: flip one bit of one individual, gated on population size
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::config::{BIT_NUM, MUTATION_RATIO};
use super::types::Genotype;
use crate::error::{Result, SgaError};
use log::trace;
use rand::Rng;

/// Upper bound on redraws while forming a single pair.
pub const MAX_PAIRING_ATTEMPTS: usize = 1_000;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws `pair_count` disjoint index pairs from `[0, population_size)`.
///
/// Both indices of a pair are drawn uniformly from the indices not yet used
/// by an earlier pair; a draw that picks the same index twice is rejected
/// and redrawn. No index appears in more than one pair.
///
/// # Errors
/// [`SgaError::PairingExhausted`] if `2 * pair_count > population_size`,
/// or if a pair could not be formed within [`MAX_PAIRING_ATTEMPTS`] draws.
pub fn generate_pairs<R: Rng>(
    pair_count: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    let exhausted = SgaError::PairingExhausted {
        pair_count,
        population_size,
    };
    if pair_count.saturating_mul(2) > population_size {
        return Err(exhausted);
    }

    let mut unused: Vec<usize> = (0..population_size).collect();
    let mut pairs = Vec::with_capacity(pair_count);

    for _ in 0..pair_count {
        let mut attempts = 0;
        let (a, b) = loop {
            if attempts == MAX_PAIRING_ATTEMPTS {
                return Err(exhausted);
            }
            attempts += 1;
            let a = rng.random_range(0..unused.len());
            let b = rng.random_range(0..unused.len());
            if a != b {
                break (a, b);
            }
        };

        let i = unused[a];
        let j = unused[b];
        // Remove the higher position first so the lower one stays valid.
        unused.swap_remove(a.max(b));
        unused.swap_remove(a.min(b));
        pairs.push((i, j));
    }

    Ok(pairs)
}

/// Single-point crossover at `point`.
///
/// The first child takes bits `[0, point)` from `a` and `[point, len)` from
/// `b`; the second child is the complementary swap.
///
/// ```
/// use u_sga::sga::{single_point_crossover, Genotype};
///
/// let a: Genotype = "000000000".parse().unwrap();
/// let b: Genotype = "111111111".parse().unwrap();
/// let (c1, c2) = single_point_crossover(&a, &b, 4);
/// assert_eq!(c1.to_string(), "000011111");
/// assert_eq!(c2.to_string(), "111100000");
/// ```
///
/// # Panics
/// Panics if the parents have different lengths or `point > a.len()`.
pub fn single_point_crossover(a: &Genotype, b: &Genotype, point: usize) -> (Genotype, Genotype) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let (a_head, a_tail) = a.bits().split_at(point);
    let (b_head, b_tail) = b.bits().split_at(point);

    let first = a_head.iter().chain(b_tail).copied().collect();
    let second = b_head.iter().chain(a_tail).copied().collect();
    (Genotype::from_bits(first), Genotype::from_bits(second))
}

/// Recombines `pair_count` random disjoint pairs of `population`.
///
/// Each pair gets its own cut point, uniform in `[0, BIT_NUM)`. Only the
/// offspring are returned (`2 * pair_count` individuals, in pair order);
/// unpaired individuals are discarded.
///
/// # Errors
/// - [`SgaError::PairingExhausted`] from [`generate_pairs`]
/// - [`SgaError::InvalidEncoding`] if a parent is not [`BIT_NUM`] bits long
pub fn cross_generation<R: Rng>(
    population: &[Genotype],
    pair_count: usize,
    rng: &mut R,
) -> Result<Vec<Genotype>> {
    let pairs = generate_pairs(pair_count, population.len(), rng)?;
    let mut offspring = Vec::with_capacity(pair_count * 2);

    for (i, j) in pairs {
        let (a, b) = (&population[i], &population[j]);
        for parent in [a, b] {
            if parent.len() != BIT_NUM {
                return Err(SgaError::InvalidEncoding {
                    expected: BIT_NUM,
                    found: parent.len(),
                });
            }
        }

        let point = rng.random_range(0..BIT_NUM);
        trace!("crossover {a} x {b} at {point}");
        let (c1, c2) = single_point_crossover(a, b, point);
        offspring.push(c1);
        offspring.push(c2);
    }

    Ok(offspring)
}

// ============================================================================
// Mutation operator
// ============================================================================

/// Flips one random bit of one random individual.
///
/// The expected number of mutants is `population.len() * MUTATION_RATIO`.
/// Mutation happens only when that number is at least 1; otherwise the
/// population is left untouched. For the default sizes (40 before
/// crossover, 20 after) this is always a no-op.
///
/// Returns the index of the mutated individual, if any.
pub fn mutate<R: Rng>(population: &mut [Genotype], rng: &mut R) -> Option<usize> {
    let expected_mutants = population.len() as f64 * MUTATION_RATIO;
    if expected_mutants < 1.0 {
        return None;
    }

    let selected = rng.random_range(0..population.len());
    let individual = &mut population[selected];
    if individual.is_empty() {
        return None;
    }
    let bit = rng.random_range(0..individual.len());
    individual.flip(bit);
    trace!("mutated individual {selected} at bit {bit}: {individual}");
    Some(selected)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn random_population(n: usize, rng: &mut StdRng) -> Vec<Genotype> {
        (0..n).map(|_| Genotype::random(rng)).collect()
    }

    // ---- generate_pairs ----

    #[test]
    fn test_pairs_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pairs = generate_pairs(10, 40, &mut rng).unwrap();
            assert_eq!(pairs.len(), 10);

            let mut seen = HashSet::new();
            for &(i, j) in &pairs {
                assert_ne!(i, j);
                assert!(i < 40 && j < 40);
                assert!(seen.insert(i), "index {i} reused");
                assert!(seen.insert(j), "index {j} reused");
            }
        }
    }

    #[test]
    fn test_pairs_can_use_whole_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let pairs = generate_pairs(20, 40, &mut rng).unwrap();
        let mut used: Vec<usize> = pairs.iter().flat_map(|&(i, j)| [i, j]).collect();
        used.sort_unstable();
        assert_eq!(used, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_pairs_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_pairs(6, 10, &mut rng),
            Err(SgaError::PairingExhausted {
                pair_count: 6,
                population_size: 10
            })
        );
        assert!(generate_pairs(1, 1, &mut rng).is_err());
        assert!(generate_pairs(1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_zero_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_pairs(0, 0, &mut rng).unwrap().is_empty());
    }

    // ---- single_point_crossover ----

    #[test]
    fn test_crossover_at_four() {
        let a: Genotype = "000000000".parse().unwrap();
        let b: Genotype = "111111111".parse().unwrap();
        let (c1, c2) = single_point_crossover(&a, &b, 4);
        assert_eq!(c1.to_string(), "000011111");
        assert_eq!(c2.to_string(), "111100000");
    }

    #[test]
    fn test_crossover_at_zero_swaps_parents() {
        let a: Genotype = "101010101".parse().unwrap();
        let b: Genotype = "110011001".parse().unwrap();
        let (c1, c2) = single_point_crossover(&a, &b, 0);
        assert_eq!(c1, b);
        assert_eq!(c2, a);
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_bits(
            a in proptest::collection::vec(any::<bool>(), BIT_NUM),
            b in proptest::collection::vec(any::<bool>(), BIT_NUM),
            point in 0..BIT_NUM,
        ) {
            let (pa, pb) = (Genotype::from_bits(a.clone()), Genotype::from_bits(b.clone()));
            let (c1, c2) = single_point_crossover(&pa, &pb, point);
            prop_assert_eq!(c1.len(), BIT_NUM);
            prop_assert_eq!(c2.len(), BIT_NUM);
            prop_assert_eq!(&c1.bits()[..point], &a[..point]);
            prop_assert_eq!(&c1.bits()[point..], &b[point..]);
            prop_assert_eq!(&c2.bits()[..point], &b[..point]);
            prop_assert_eq!(&c2.bits()[point..], &a[point..]);
        }
    }

    // ---- cross_generation ----

    #[test]
    fn test_cross_generation_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = random_population(40, &mut rng);
        for k in [1, 5, 10, 20] {
            let next = cross_generation(&pop, k, &mut rng).unwrap();
            assert_eq!(next.len(), 2 * k);
            assert!(next.iter().all(|g| g.len() == BIT_NUM));
        }
    }

    #[test]
    fn test_cross_generation_of_complements() {
        // Every pair is a 0/1 parent pair, so each child pair must be
        // complementary bit-by-bit.
        let zeros: Genotype = "000000000".parse().unwrap();
        let ones: Genotype = "111111111".parse().unwrap();
        let pop = vec![zeros, ones];

        let mut rng = StdRng::seed_from_u64(9);
        let next = cross_generation(&pop, 1, &mut rng).unwrap();
        assert_eq!(next.len(), 2);
        for (x, y) in next[0].bits().iter().zip(next[1].bits()) {
            assert_ne!(x, y);
        }
    }

    #[test]
    fn test_cross_generation_rejects_bad_length() {
        let pop: Vec<Genotype> = vec!["0101".parse().unwrap(), "1010".parse().unwrap()];
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            cross_generation(&pop, 1, &mut rng),
            Err(SgaError::InvalidEncoding { found: 4, .. })
        ));
    }

    #[test]
    fn test_cross_generation_pairing_exhausted() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = random_population(5, &mut rng);
        assert!(matches!(
            cross_generation(&pop, 3, &mut rng),
            Err(SgaError::PairingExhausted { .. })
        ));
    }

    // ---- mutate ----

    #[test]
    fn test_mutation_gate_closed_for_default_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [20, 40, 99] {
            let mut pop = random_population(n, &mut rng);
            let before = pop.clone();
            assert_eq!(mutate(&mut pop, &mut rng), None);
            assert_eq!(pop, before);
        }
    }

    #[test]
    fn test_mutation_flips_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = random_population(100, &mut rng);
        let before = pop.clone();

        let idx = mutate(&mut pop, &mut rng).expect("100 * 0.01 >= 1 must mutate");

        for (k, (old, new)) in before.iter().zip(&pop).enumerate() {
            let diff = old
                .bits()
                .iter()
                .zip(new.bits())
                .filter(|(x, y)| x != y)
                .count();
            if k == idx {
                assert_eq!(diff, 1);
            } else {
                assert_eq!(diff, 0);
            }
        }
    }

    #[test]
    fn test_mutation_empty_population() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop: Vec<Genotype> = Vec::new();
        assert_eq!(mutate(&mut pop, &mut rng), None);
    }
}
