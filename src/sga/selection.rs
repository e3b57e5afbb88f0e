//! Fitness-proportionate (roulette wheel) selection.
//!
//! Selection runs in three steps:
//!
//! 1. [`ProbabilityTable::build`] evaluates every individual and assigns
//!    each distinct genotype its share of the total fitness.
//! 2. [`RouletteWheel::build`] lays those shares out as contiguous
//!    half-open slots covering the search interval `[-1, 2]`.
//! 3. [`select_next_generation`] spins the wheel once per draw.
//!
//! Both the table and the wheel iterate genotypes in first-occurrence
//! order, so a seeded run always builds the same wheel.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel reproduction)

use super::config::{INTERVAL_WIDTH, LOWER_BOUND, UPPER_BOUND};
use super::fitness::evaluate;
use super::types::Genotype;
use crate::error::{Result, SgaError};
use log::{trace, warn};
use rand::Rng;
use std::collections::HashMap;

/// Selection probability of each distinct genotype in a population.
///
/// Duplicate genotypes are coalesced and their probability mass summed.
/// Entries keep the order in which each genotype first appears.
#[derive(Debug, Clone)]
pub struct ProbabilityTable {
    entries: Vec<(Genotype, f64)>,
    total_fitness: f64,
}

impl ProbabilityTable {
    /// Builds the table for `population`.
    ///
    /// `probability(g) = sum of fitness over occurrences of g / total fitness`.
    ///
    /// # Errors
    /// - [`SgaError::EmptyPopulation`] if `population` is empty
    /// - [`SgaError::InvalidEncoding`] if a genotype cannot be decoded
    /// - [`SgaError::InvalidFitness`] if any fitness is negative or not finite
    /// - [`SgaError::DegenerateObjective`] if the total fitness is zero
    pub fn build(population: &[Genotype]) -> Result<Self> {
        Self::from_fitness(population, evaluate)
    }

    /// Builds the table using `fitness` to score each individual.
    pub(crate) fn from_fitness<F>(population: &[Genotype], fitness: F) -> Result<Self>
    where
        F: Fn(&Genotype) -> Result<f64>,
    {
        if population.is_empty() {
            return Err(SgaError::EmptyPopulation);
        }

        let mut entries: Vec<(Genotype, f64)> = Vec::new();
        let mut index: HashMap<&Genotype, usize> = HashMap::new();
        let mut total_fitness = 0.0;

        for genotype in population {
            let f = fitness(genotype)?;
            if !f.is_finite() || f < 0.0 {
                return Err(SgaError::InvalidFitness {
                    genotype: genotype.to_string(),
                    fitness: f,
                });
            }
            total_fitness += f;
            match index.get(genotype) {
                Some(&i) => entries[i].1 += f,
                None => {
                    index.insert(genotype, entries.len());
                    entries.push((genotype.clone(), f));
                }
            }
        }

        if !(total_fitness > 0.0 && total_fitness.is_finite()) {
            return Err(SgaError::DegenerateObjective {
                total: total_fitness,
            });
        }

        for entry in &mut entries {
            entry.1 /= total_fitness;
        }

        Ok(Self {
            entries,
            total_fitness,
        })
    }

    /// Number of distinct genotypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table is never built from an empty population.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of fitness over all individuals, duplicates included.
    pub fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Probability of `genotype`, or `None` if it is not in the population.
    pub fn probability(&self, genotype: &Genotype) -> Option<f64> {
        self.entries
            .iter()
            .find(|(g, _)| g == genotype)
            .map(|&(_, p)| p)
    }

    /// Iterates `(genotype, probability)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&Genotype, f64)> {
        self.entries.iter().map(|(g, p)| (g, *p))
    }
}

/// One genotype's slot `[low, high)` on the roulette wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSlot {
    /// The genotype selected when the cursor lands in this slot.
    pub genotype: Genotype,
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound (inclusive for the last slot).
    pub high: f64,
}

impl WheelSlot {
    fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Roulette wheel partitioning `[-1, 2]` proportionally to a [`ProbabilityTable`].
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    slots: Vec<WheelSlot>,
}

impl RouletteWheel {
    /// Lays out the table's probabilities as contiguous slots.
    ///
    /// Starting at `-1`, each genotype receives `[cursor, cursor + p * 3)`.
    /// The last slot's upper bound is pinned to exactly `2` so rounding
    /// never leaves a gap at the top of the interval.
    pub fn build(table: &ProbabilityTable) -> Self {
        let mut slots = Vec::with_capacity(table.len());
        let mut cursor = LOWER_BOUND;
        for (genotype, p) in table.iter() {
            let high = cursor + p * INTERVAL_WIDTH;
            slots.push(WheelSlot {
                genotype: genotype.clone(),
                low: cursor,
                high,
            });
            cursor = high;
        }
        if let Some(last) = slots.last_mut() {
            trace!(
                "wheel built: {} slots, top edge {} pinned to {}",
                table.len(),
                last.high,
                UPPER_BOUND
            );
            last.high = UPPER_BOUND;
        }
        Self { slots }
    }

    /// The slots in table order.
    pub fn slots(&self) -> &[WheelSlot] {
        &self.slots
    }

    /// Returns the genotype whose slot contains `cursor`.
    ///
    /// The first slot (in table order) with `low <= cursor < high` wins; the
    /// last slot also accepts `cursor == high`. A cursor outside every slot
    /// is clamped to the nearest non-empty slot.
    ///
    /// # Panics
    /// Panics if the wheel has no slots. [`RouletteWheel::build`] never
    /// produces such a wheel from a table.
    pub fn spin(&self, cursor: f64) -> &Genotype {
        let last = self.slots.len() - 1;
        let hit = self.slots.iter().enumerate().find(|(i, slot)| {
            slot.low <= cursor && (cursor < slot.high || (*i == last && cursor == slot.high))
        });
        if let Some((_, slot)) = hit {
            return &slot.genotype;
        }

        let mut non_empty = self.slots.iter().filter(|s| s.width() > 0.0);
        let fallback = if cursor < LOWER_BOUND {
            non_empty.next()
        } else {
            non_empty.last()
        };
        let slot = fallback.unwrap_or(&self.slots[last]);
        warn!("cursor {cursor} outside every wheel slot, clamped to {}", slot.genotype);
        &slot.genotype
    }
}

/// Samples `size` individuals from `population`, with replacement,
/// proportionally to fitness.
///
/// The table and wheel are built once; each draw spins the wheel with a
/// cursor uniform in `[-1, 2)`. The result always has exactly `size`
/// individuals.
///
/// # Errors
/// Propagates the errors of [`ProbabilityTable::build`].
pub fn select_next_generation<R: Rng>(
    population: &[Genotype],
    size: usize,
    rng: &mut R,
) -> Result<Vec<Genotype>> {
    let table = ProbabilityTable::build(population)?;
    let wheel = RouletteWheel::build(&table);

    let next = (0..size)
        .map(|_| {
            let cursor = rng.random_range(LOWER_BOUND..UPPER_BOUND);
            wheel.spin(cursor).clone()
        })
        .collect();
    Ok(next)
}
