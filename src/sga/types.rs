//! Genotype representation.
//!
//! A [`Genotype`] is a bit sequence, most significant bit first. It is
//! written and parsed as a string of `'0'`/`'1'` characters, which is also
//! how it appears in logs.

use super::config::BIT_NUM;
use crate::error::{Result, SgaError};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution encoded as a bit sequence.
///
/// Genotypes compare and hash by value, so two structurally identical
/// genotypes are the same key in a
/// [`ProbabilityTable`](super::ProbabilityTable).
///
/// Any length can be constructed; only genotypes of exactly [`BIT_NUM`]
/// bits can be decoded.
///
/// ```
/// use u_sga::sga::Genotype;
///
/// let g: Genotype = "000011111".parse().unwrap();
/// assert_eq!(g.len(), 9);
/// assert_eq!(g.to_string(), "000011111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genotype {
    bits: Vec<bool>,
}

impl Genotype {
    /// Creates a genotype from raw bits, most significant first.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a uniformly random genotype of [`BIT_NUM`] bits.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let bits = (0..BIT_NUM).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the genotype has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Interprets the bits as an unsigned big-endian integer.
    pub(crate) fn as_unsigned(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genotype {
    type Err = SgaError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SgaError::InvalidBit(other)),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { bits })
    }
}
