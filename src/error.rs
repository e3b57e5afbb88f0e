//! Error type shared by every SGA component.
//!
//! All variants are fatal to the call that produced them; the generational
//! loop propagates them unchanged to the caller of
//! [`SgaRunner::run`](crate::sga::SgaRunner::run).

use thiserror::Error;

/// Errors produced while encoding, selecting, recombining, or configuring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SgaError {
    /// A genotype does not have the fixed bit length required for decoding.
    #[error("invalid encoding: expected {expected} bits, found {found}")]
    InvalidEncoding {
        /// Required bit length.
        expected: usize,
        /// Actual bit length of the offending genotype.
        found: usize,
    },

    /// A character other than `'0'` or `'1'` appeared in a genotype string.
    #[error("invalid bit character {0:?}")]
    InvalidBit(char),

    /// Selection or evaluation was asked to work on an empty population.
    #[error("population is empty")]
    EmptyPopulation,

    /// Total fitness is zero or not finite, so proportional selection is undefined.
    #[error("degenerate objective: total fitness is {total}")]
    DegenerateObjective {
        /// Sum of fitness over all individuals.
        total: f64,
    },

    /// A single individual has a negative or non-finite fitness.
    #[error("invalid fitness {fitness} for genotype {genotype}")]
    InvalidFitness {
        /// Bit string of the offending genotype.
        genotype: String,
        /// The fitness value that was rejected.
        fitness: f64,
    },

    /// Crossover pairing could not find enough non-overlapping index pairs.
    #[error("cannot form {pair_count} disjoint pairs from {population_size} individuals")]
    PairingExhausted {
        /// Number of pairs requested.
        pair_count: usize,
        /// Number of individuals available.
        population_size: usize,
    },

    /// The run configuration was rejected by [`SgaConfig::validate`](crate::sga::SgaConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SgaError>;
