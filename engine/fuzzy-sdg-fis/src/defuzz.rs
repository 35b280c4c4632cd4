//! Defuzzification of an aggregated output set

use crate::error::{FisError, Result};
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};

const ZERO_TOLERANCE: f64 = 1e-10;

/// Defuzzification method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationMethod {
    /// Centroid (center of gravity)
    #[default]
    Centroid,
    /// Bisector (divides area in half)
    Bisector,
    /// Mean of maximum
    MeanOfMaximum,
    /// Smallest of maximum
    SmallestOfMaximum,
    /// Largest of maximum
    LargestOfMaximum,
}

impl DefuzzificationMethod {
    /// Reduce the sampled membership curve to a crisp value
    ///
    /// `grid` and `membership` must have the same length.
    pub fn defuzzify(&self, grid: &Array1<f64>, membership: &Array1<f64>) -> Result<f64> {
        debug_assert_eq!(grid.len(), membership.len());

        let max_membership = membership.iter().copied().fold(0.0_f64, f64::max);
        if max_membership < ZERO_TOLERANCE {
            return Err(FisError::EmptyOutput);
        }

        match self {
            DefuzzificationMethod::Centroid => {
                // Centroid: ∑ x * μ(x) / ∑ μ(x)
                let numerator = Zip::from(grid)
                    .and(membership)
                    .fold(0.0, |acc, &x, &mu| acc + x * mu);
                let denominator = membership.sum();
                Ok(numerator / denominator)
            }
            DefuzzificationMethod::Bisector => {
                let half_area = membership.sum() / 2.0;
                let mut cumulative = 0.0;
                for (&x, &mu) in grid.iter().zip(membership.iter()) {
                    cumulative += mu;
                    if cumulative >= half_area {
                        return Ok(x);
                    }
                }
                Err(FisError::EmptyOutput)
            }
            DefuzzificationMethod::MeanOfMaximum => {
                let (sum, count) = maxima(grid, membership, max_membership)
                    .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));
                Ok(sum / count as f64)
            }
            DefuzzificationMethod::SmallestOfMaximum => maxima(grid, membership, max_membership)
                .next()
                .ok_or(FisError::EmptyOutput),
            DefuzzificationMethod::LargestOfMaximum => maxima(grid, membership, max_membership)
                .last()
                .ok_or(FisError::EmptyOutput),
        }
    }
}

fn maxima<'a>(
    grid: &'a Array1<f64>,
    membership: &'a Array1<f64>,
    max_membership: f64,
) -> impl Iterator<Item = f64> + 'a {
    grid.iter()
        .zip(membership.iter())
        .filter(move |(_, &mu)| (mu - max_membership).abs() < ZERO_TOLERANCE)
        .map(|(&x, _)| x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> Array1<f64> {
        Array1::linspace(0.0, 10.0, 11)
    }

    #[test]
    fn test_centroid_of_symmetric_set() {
        let membership = grid().mapv(|x| if (3.0..=7.0).contains(&x) { 1.0 } else { 0.0 });
        let crisp = DefuzzificationMethod::Centroid
            .defuzzify(&grid(), &membership)
            .unwrap();
        assert_relative_eq!(crisp, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_weights_by_membership() {
        let mut membership = Array1::zeros(11);
        membership[2] = 1.0;
        membership[8] = 0.5;
        let crisp = DefuzzificationMethod::Centroid
            .defuzzify(&grid(), &membership)
            .unwrap();
        assert_relative_eq!(crisp, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_maximum_methods() {
        let membership = grid().mapv(|x| if (4.0..=6.0).contains(&x) { 0.8 } else { 0.1 });
        let g = grid();

        assert_relative_eq!(
            DefuzzificationMethod::MeanOfMaximum.defuzzify(&g, &membership).unwrap(),
            5.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            DefuzzificationMethod::SmallestOfMaximum.defuzzify(&g, &membership).unwrap(),
            4.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            DefuzzificationMethod::LargestOfMaximum.defuzzify(&g, &membership).unwrap(),
            6.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bisector() {
        let membership = Array1::from_elem(11, 1.0);
        let crisp = DefuzzificationMethod::Bisector
            .defuzzify(&grid(), &membership)
            .unwrap();
        assert_relative_eq!(crisp, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_output_is_error() {
        let membership = Array1::zeros(11);
        for method in [
            DefuzzificationMethod::Centroid,
            DefuzzificationMethod::Bisector,
            DefuzzificationMethod::MeanOfMaximum,
        ] {
            assert!(matches!(
                method.defuzzify(&grid(), &membership),
                Err(FisError::EmptyOutput)
            ));
        }
    }
}
