//! Objective function.

use super::encoding::decode;
use super::types::Genotype;
use crate::error::Result;
use std::f64::consts::PI;

/// Objective `f(x) = x * sin(10 * pi * x) + 2`.
///
/// On `[-1, 2]` the global maximum is roughly 3.85, near `x = 1.85`.
pub fn fitness(x: f64) -> f64 {
    x * (10.0 * PI * x).sin() + 2.0
}

/// Decodes `genotype` and evaluates the objective.
pub fn evaluate(genotype: &Genotype) -> Result<f64> {
    decode(genotype).map(fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SgaError;

    #[test]
    fn test_known_values() {
        assert!((fitness(0.0) - 2.0).abs() < 1e-12);
        // sin(10 * pi) == 0
        assert!((fitness(1.0) - 2.0).abs() < 1e-12);
        assert!((fitness(-1.0) - 2.0).abs() < 1e-12);
        // sin(10 * pi * 0.05) == 1
        assert!((fitness(0.05) - 2.05).abs() < 1e-12);
    }

    #[test]
    fn test_global_maximum_region() {
        let f = fitness(1.85);
        assert!(f > 3.84 && f < 3.86, "f(1.85) = {f}");
    }

    #[test]
    fn test_non_negative_on_search_interval() {
        let mut x = -1.0;
        while x <= 2.0 {
            assert!(fitness(x) >= 0.0, "f({x}) is negative");
            x += 0.001;
        }
    }

    #[test]
    fn test_evaluate_propagates_encoding_error() {
        let g: Genotype = "01".parse().unwrap();
        assert!(matches!(evaluate(&g), Err(SgaError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_evaluate_matches_decode() {
        let g: Genotype = "111100000".parse().unwrap();
        let x = decode(&g).unwrap();
        assert_eq!(evaluate(&g).unwrap(), fitness(x));
    }
}
