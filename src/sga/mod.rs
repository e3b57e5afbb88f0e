//! Simple Genetic Algorithm.
//!
//! Maximizes `f(x) = x * sin(10 * pi * x) + 2` over `x` in `[-1, 2]`,
//! encoding `x` as a [`BIT_NUM`]-bit [`Genotype`]. Every generation runs
//! roulette wheel selection, single-point crossover on disjoint random pairs,
//! and a population-size-gated single-bit mutation.
//!
//! # Key Types
//!
//! - [`SgaConfig`]: Run parameters (population size, generations, pairs, seed)
//! - [`SgaRunner`]: Runs the loop to completion
//! - [`SgaLoop`]: Step-wise loop with an explicit [`LoopState`]
//! - [`SgaResult`]: Best genotype/fitness and per-generation [`GenerationStats`]
//!
//! # Components
//!
//! - [`decode`] / [`fitness`]: genotype → phenotype → objective value
//! - [`ProbabilityTable`] / [`RouletteWheel`]: fitness-proportionate selection
//! - [`operators`]: pairing, crossover, mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod encoding;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{
    SgaConfig, BIT_NUM, GENERATION_NUM, INTERVAL_WIDTH, LOWER_BOUND, MUTATION_RATIO,
    POPULATION_SCALE, UPPER_BOUND,
};
pub use encoding::decode;
pub use fitness::{evaluate, fitness};
pub use operators::{cross_generation, generate_pairs, mutate, single_point_crossover};
pub use runner::{
    GenerationObserver, GenerationStats, LoopState, NoopObserver, SgaLoop, SgaResult, SgaRunner,
};
pub use selection::{select_next_generation, ProbabilityTable, RouletteWheel, WheelSlot};
pub use types::Genotype;
