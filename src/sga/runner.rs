//! SGA generational loop.
//!
//! [`SgaLoop`] is a step-wise state machine
//! (`Initializing → Evaluating → Terminated`); [`SgaRunner`] drives it to
//! completion. Each generation:
//! best tracking → selection → crossover → mutation.

use super::config::SgaConfig;
use super::encoding::decode;
use super::fitness::evaluate;
use super::operators::{cross_generation, mutate};
use super::selection::select_next_generation;
use super::types::Genotype;
use crate::error::{Result, SgaError};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Lifecycle of a [`SgaLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Generation 0 has not been created yet.
    Initializing,
    /// Generations are being produced.
    Evaluating,
    /// All configured generations have run.
    Terminated,
}

/// Per-generation report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Number of individuals produced by selection.
    pub next_generation_size: usize,

    /// Number of distinct genotypes among the selected individuals.
    pub distinct_count: usize,

    /// Maximum fitness in this generation's (pre-selection) population.
    pub generation_max_fitness: f64,

    /// Best fitness seen so far, this generation included.
    pub best_fitness: f64,
}

/// Result of a completed SGA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgaResult {
    /// Best fitness found across all generations.
    pub best_fitness: f64,

    /// Genotype that produced `best_fitness`.
    pub best_genotype: Genotype,

    /// Decoded value of `best_genotype`.
    pub best_phenotype: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// One entry per generation, in order.
    pub history: Vec<GenerationStats>,
}

/// Receives a [`GenerationStats`] after every generation.
///
/// Implemented for any `FnMut(&GenerationStats)`.
pub trait GenerationObserver {
    /// Called once per generation, after the next population is produced.
    fn on_generation(&mut self, stats: &GenerationStats);
}

impl<F: FnMut(&GenerationStats)> GenerationObserver for F {
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// Step-wise SGA loop owning its random source.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_sga::sga::{LoopState, SgaConfig, SgaLoop};
///
/// let config = SgaConfig::default().with_max_generations(3);
/// let mut sga = SgaLoop::new(config, StdRng::seed_from_u64(1)).unwrap();
/// while let Some(stats) = sga.step().unwrap() {
///     assert!(stats.best_fitness >= stats.generation_max_fitness);
/// }
/// assert_eq!(sga.state(), LoopState::Terminated);
/// ```
#[derive(Debug)]
pub struct SgaLoop<R: Rng> {
    config: SgaConfig,
    rng: R,
    state: LoopState,
    population: Vec<Genotype>,
    generation: usize,
    best: Option<(Genotype, f64)>,
    history: Vec<GenerationStats>,
}

impl<R: Rng> SgaLoop<R> {
    /// Creates a loop in the [`LoopState::Initializing`] state.
    ///
    /// # Errors
    /// [`SgaError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: SgaConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            history: Vec::with_capacity(config.max_generations),
            config,
            rng,
            state: LoopState::Initializing,
            population: Vec::new(),
            generation: 0,
            best: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The population the next step will evaluate.
    ///
    /// Empty until the first step.
    pub fn population(&self) -> &[Genotype] {
        &self.population
    }

    /// Best `(genotype, fitness)` seen so far.
    pub fn best(&self) -> Option<(&Genotype, f64)> {
        self.best.as_ref().map(|(g, f)| (g, *f))
    }

    /// Runs one generation.
    ///
    /// The first call also creates generation 0. Returns `Ok(None)` once
    /// the loop has terminated.
    pub fn step(&mut self) -> Result<Option<GenerationStats>> {
        match self.state {
            LoopState::Terminated => return Ok(None),
            LoopState::Initializing => {
                self.population = init_population(self.config.population_size, &mut self.rng);
                self.state = LoopState::Evaluating;
            }
            LoopState::Evaluating => {}
        }

        let (gen_best, gen_max) = population_max(&self.population)?;
        let improved = self.best.as_ref().is_none_or(|(_, f)| gen_max > *f);
        if improved {
            self.best = Some((gen_best.clone(), gen_max));
        }
        let best_fitness = self.best.as_ref().map_or(gen_max, |(_, f)| *f);

        let next = select_next_generation(
            &self.population,
            self.config.population_size,
            &mut self.rng,
        )?;
        let distinct_count = next.iter().collect::<HashSet<_>>().len();

        let mut offspring = cross_generation(&next, self.config.pair_count, &mut self.rng)?;
        mutate(&mut offspring, &mut self.rng);
        self.population = offspring;

        let stats = GenerationStats {
            generation: self.generation,
            next_generation_size: next.len(),
            distinct_count,
            generation_max_fitness: gen_max,
            best_fitness,
        };
        debug!(
            "generation {}: selected {} ({} distinct), max fitness {:.6}, best {:.6}",
            stats.generation,
            stats.next_generation_size,
            stats.distinct_count,
            stats.generation_max_fitness,
            stats.best_fitness
        );
        self.history.push(stats.clone());

        self.generation += 1;
        if self.generation >= self.config.max_generations {
            self.state = LoopState::Terminated;
        }
        Ok(Some(stats))
    }

    /// Runs the remaining generations and returns the result.
    pub fn finish<O: GenerationObserver>(mut self, observer: &mut O) -> Result<SgaResult> {
        while let Some(stats) = self.step()? {
            observer.on_generation(&stats);
        }

        let (best_genotype, best_fitness) = self.best.ok_or(SgaError::EmptyPopulation)?;
        let best_phenotype = decode(&best_genotype)?;
        info!(
            "SGA finished after {} generations: best fitness {:.6} at x = {:.6} ({})",
            self.generation, best_fitness, best_phenotype, best_genotype
        );

        Ok(SgaResult {
            best_fitness,
            best_genotype,
            best_phenotype,
            generations: self.generation,
            history: self.history,
        })
    }
}

/// Executes the SGA to completion.
///
/// # Usage
///
/// ```
/// use u_sga::sga::{SgaConfig, SgaRunner};
///
/// let config = SgaConfig::default().with_seed(42);
/// let result = SgaRunner::run(&config).unwrap();
/// assert_eq!(result.generations, 100);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct SgaRunner;

impl SgaRunner {
    /// Runs the SGA with a [`StdRng`] seeded from `config.seed`.
    pub fn run(config: &SgaConfig) -> Result<SgaResult> {
        Self::run_with_observer(config, &mut NoopObserver)
    }

    /// Runs the SGA, reporting every generation to `observer`.
    pub fn run_with_observer<O: GenerationObserver>(
        config: &SgaConfig,
        observer: &mut O,
    ) -> Result<SgaResult> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(config, rng, observer)
    }

    /// Runs the SGA with a caller-supplied random source.
    pub fn run_with_rng<R: Rng, O: GenerationObserver>(
        config: &SgaConfig,
        rng: R,
        observer: &mut O,
    ) -> Result<SgaResult> {
        SgaLoop::new(config.clone(), rng)?.finish(observer)
    }
}

/// Creates `size` structurally distinct random genotypes.
///
/// `size` must not exceed the number of distinct genotypes;
/// [`SgaConfig::validate`] guarantees this.
fn init_population<R: Rng>(size: usize, rng: &mut R) -> Vec<Genotype> {
    let mut seen = HashSet::with_capacity(size);
    let mut population = Vec::with_capacity(size);
    while population.len() < size {
        let genotype = Genotype::random(rng);
        if seen.insert(genotype.clone()) {
            population.push(genotype);
        }
    }
    population
}

/// Find the individual with the highest fitness.
///
/// Ties go to the last such individual.
fn population_max(population: &[Genotype]) -> Result<(&Genotype, f64)> {
    let mut best: Option<(&Genotype, f64)> = None;
    for genotype in population {
        let f = evaluate(genotype)?;
        if best.is_none_or(|(_, max)| f >= max) {
            best = Some((genotype, f));
        }
    }
    best.ok_or(SgaError::EmptyPopulation)
}

// ============================================================================
// Tests
// ============================================================================
