//! Simple Genetic Algorithm (SGA).
//!
//! A binary-encoded, roulette-wheel genetic algorithm that approximates the
//! maximum of `x * sin(10 * pi * x) + 2` on `[-1, 2]`:
//!
//! - **Encoding**: 9-bit genotypes decoded linearly onto the search interval.
//! - **Selection**: fitness-proportionate sampling over an insertion-ordered
//!   roulette wheel.
//! - **Crossover**: single-point recombination of disjoint random pairs.
//! - **Mutation**: a single bit flip, gated on population size.
//!
//! Randomness is a single [`rand::Rng`] handle threaded through every
//! component, so seeded runs are reproducible. Failures surface as
//! [`SgaError`]; progress is reported through the [`log`] facade and an
//! optional [`GenerationObserver`](sga::GenerationObserver).
//!
//! ```
//! use u_sga::sga::{SgaConfig, SgaRunner};
//!
//! let result = SgaRunner::run(&SgaConfig::default().with_seed(7)).unwrap();
//! assert!(result.best_fitness > 2.0);
//! ```

pub mod error;
pub mod sga;

pub use error::{Result, SgaError};
