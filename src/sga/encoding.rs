//! Genotype → phenotype decoding.

use super::config::{BIT_NUM, INTERVAL_WIDTH, LOWER_BOUND};
use super::types::Genotype;
use crate::error::{Result, SgaError};

/// Decodes a genotype into a phenotype in `[LOWER_BOUND, UPPER_BOUND]`.
///
/// The bits are read as an unsigned integer `v` in `[0, 2^BIT_NUM - 1]`
/// and mapped linearly: `-1 + v * 3 / (2^BIT_NUM - 1)`.
///
/// # Errors
/// [`SgaError::InvalidEncoding`] if the genotype is not exactly
/// [`BIT_NUM`] bits long.
///
/// ```
/// use u_sga::sga::{decode, Genotype};
///
/// let lo: Genotype = "000000000".parse().unwrap();
/// let hi: Genotype = "111111111".parse().unwrap();
/// assert_eq!(decode(&lo).unwrap(), -1.0);
/// assert_eq!(decode(&hi).unwrap(), 2.0);
/// ```
pub fn decode(genotype: &Genotype) -> Result<f64> {
    if genotype.len() != BIT_NUM {
        return Err(SgaError::InvalidEncoding {
            expected: BIT_NUM,
            found: genotype.len(),
        });
    }
    let max_value = ((1u64 << BIT_NUM) - 1) as f64;
    Ok(LOWER_BOUND + genotype.as_unsigned() as f64 * INTERVAL_WIDTH / max_value)
}
