//! SGA configuration and fixed design parameters.
//!
//! The encoding length, the search interval, and the mutation ratio are
//! compile-time constants. [`SgaConfig`] holds the parameters of a single
//! run; its defaults are the reference design (40 individuals, 100
//! generations, 10 crossover pairs).

use crate::error::{Result, SgaError};

/// Number of bits in a genotype.
pub const BIT_NUM: usize = 9;

/// Default population size.
pub const POPULATION_SCALE: usize = 40;

/// Default number of generations.
pub const GENERATION_NUM: usize = 100;

/// Left edge of the search interval.
pub const LOWER_BOUND: f64 = -1.0;

/// Right edge of the search interval.
pub const UPPER_BOUND: f64 = 2.0;

/// Width of the search interval, also the width of the roulette wheel.
pub const INTERVAL_WIDTH: f64 = UPPER_BOUND - LOWER_BOUND;

/// Fraction of the population expected to mutate per generation.
///
/// Mutation only happens when `population_len * MUTATION_RATIO >= 1`.
pub const MUTATION_RATIO: f64 = 0.01;

/// Configuration for a Simple Genetic Algorithm run.
///
/// # Defaults
///
/// ```
/// use u_sga::sga::SgaConfig;
///
/// let config = SgaConfig::default();
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.pair_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_sga::sga::SgaConfig;
///
/// let config = SgaConfig::default()
///     .with_max_generations(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgaConfig {
    /// Number of distinct individuals in generation 0, and the number of
    /// roulette draws made by every selection step.
    pub population_size: usize,

    /// Number of generations. The loop always runs all of them.
    pub max_generations: usize,

    /// Number of crossover pairs per generation.
    ///
    /// Crossover keeps only offspring, so the population entering mutation
    /// has `2 * pair_count` individuals.
    pub pair_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SgaConfig {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SCALE,
            max_generations: GENERATION_NUM,
            pair_count: POPULATION_SCALE / 4,
            seed: None,
        }
    }
}

impl SgaConfig {
    /// Sets the population size.
    ///
    /// Does not touch `pair_count`; call [`with_pair_count`](Self::with_pair_count)
    /// as well when shrinking the population.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of crossover pairs.
    pub fn with_pair_count(mut self, n: usize) -> Self {
        self.pair_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size > 1 << BIT_NUM {
            return Err(invalid(
                "population_size exceeds the number of distinct genotypes",
            ));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if self.pair_count == 0 {
            return Err(invalid("pair_count must be at least 1"));
        }
        if self.pair_count * 2 > self.population_size {
            return Err(invalid(
                "pair_count too high: pairs need 2 * pair_count individuals",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SgaError {
    SgaError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SgaConfig::default();
        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.pair_count, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interval_constants() {
        assert!((INTERVAL_WIDTH - 3.0).abs() < 1e-15);
        assert_eq!(BIT_NUM, 9);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SgaConfig::default()
            .with_population_size(100)
            .with_max_generations(20)
            .with_pair_count(25)
            .with_seed(42);

        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 20);
        assert_eq!(config.pair_count, 25);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = SgaConfig::default().with_population_size(1).with_pair_count(1);
        assert!(matches!(config.validate(), Err(SgaError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_population_exceeds_genotype_space() {
        let config = SgaConfig::default().with_population_size(513);
        assert!(config.validate().is_err());

        let config = SgaConfig::default().with_population_size(512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = SgaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_pair_count() {
        assert!(SgaConfig::default().with_pair_count(0).validate().is_err());
        assert!(SgaConfig::default().with_pair_count(21).validate().is_err());
        assert!(SgaConfig::default().with_pair_count(20).validate().is_ok());
    }
}
