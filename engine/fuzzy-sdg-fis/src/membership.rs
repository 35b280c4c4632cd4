//! # Membership Functions
//!
//! Shapes used to describe linguistic values over a crisp domain. Every
//! function maps a crisp value to a membership degree in `[0, 1]`.
//!
//! The `S`, `Z` and `Bell` shapes are the ones the SDG compliance variables
//! are built from; the piecewise-linear and gaussian shapes are available for
//! custom indicator definitions.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sdg_fis::membership::{FuzzySet, MembershipFunction};
//!
//! let achieved = FuzzySet::new("SDG achieved", MembershipFunction::S { a: 75.0, b: 85.0 });
//!
//! assert_eq!(achieved.membership(70.0), 0.0);
//! assert_eq!(achieved.membership(80.0), 0.5);
//! assert_eq!(achieved.membership(90.0), 1.0);
//! ```

use crate::error::{FisError, Result};
use serde::{Deserialize, Serialize};

/// Membership function types for fuzzy sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Triangular membership function: μ(x) = max(min((x-a)/(b-a), (c-x)/(c-b)), 0)
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapezoidal membership function with plateau on [b, c]
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// Gaussian membership function: μ(x) = exp(-((x-c)^2)/(2*σ^2))
    Gaussian { center: f64, sigma: f64 },
    /// Sigmoid membership function: μ(x) = 1/(1 + exp(-a(x-c)))
    Sigmoid { a: f64, c: f64 },
    /// Singleton (crisp value)
    Singleton { value: f64 },
    /// S-shaped spline rising from 0 at `a` to 1 at `b`
    S { a: f64, b: f64 },
    /// Z-shaped spline falling from 1 at `a` to 0 at `b`
    Z { a: f64, b: f64 },
    /// Generalized bell: μ(x) = 1/(1 + |(x-c)/a|^(2b))
    Bell { a: f64, b: f64, c: f64 },
}

impl MembershipFunction {
    /// Compute membership degree for a given value
    pub fn membership(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x == b {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
            MembershipFunction::Gaussian { center, sigma } => {
                let exp_arg = -((x - center).powi(2)) / (2.0 * sigma.powi(2));
                exp_arg.exp()
            }
            MembershipFunction::Sigmoid { a, c } => 1.0 / (1.0 + (-a * (x - c)).exp()),
            MembershipFunction::Singleton { value } => {
                if (x - value).abs() < 1e-10 {
                    1.0
                } else {
                    0.0
                }
            }
            MembershipFunction::S { a, b } => s_curve(x, a, b),
            MembershipFunction::Z { a, b } => 1.0 - s_curve(x, a, b),
            MembershipFunction::Bell { a, b, c } => {
                1.0 / (1.0 + ((x - c) / a).abs().powf(2.0 * b))
            }
        }
    }

    /// Check that the parameters describe a well-formed shape
    pub fn validate(&self) -> Result<()> {
        let params = self.parameters();
        if params.iter().any(|p| !p.is_finite()) {
            return Err(FisError::InvalidMembership(format!(
                "{self:?} has non-finite parameters"
            )));
        }

        let ok = match *self {
            MembershipFunction::Triangular { a, b, c } => a <= b && b <= c && a < c,
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                a <= b && b <= c && c <= d && a < d
            }
            MembershipFunction::Gaussian { sigma, .. } => sigma > 0.0,
            MembershipFunction::Sigmoid { a, .. } => a != 0.0,
            MembershipFunction::Singleton { .. } => true,
            MembershipFunction::S { a, b } | MembershipFunction::Z { a, b } => a < b,
            MembershipFunction::Bell { a, b, .. } => a > 0.0 && b > 0.0,
        };

        if ok {
            Ok(())
        } else {
            Err(FisError::InvalidMembership(format!(
                "{self:?} has inconsistent parameters"
            )))
        }
    }

    fn parameters(&self) -> Vec<f64> {
        match *self {
            MembershipFunction::Triangular { a, b, c } => vec![a, b, c],
            MembershipFunction::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
            MembershipFunction::Gaussian { center, sigma } => vec![center, sigma],
            MembershipFunction::Sigmoid { a, c } => vec![a, c],
            MembershipFunction::Singleton { value } => vec![value],
            MembershipFunction::S { a, b } | MembershipFunction::Z { a, b } => vec![a, b],
            MembershipFunction::Bell { a, b, c } => vec![a, b, c],
        }
    }
}

/// Quadratic spline from 0 at `a` to 1 at `b`, inflecting at the midpoint
fn s_curve(x: f64, a: f64, b: f64) -> f64 {
    if x <= a {
        0.0
    } else if x >= b {
        1.0
    } else if x <= (a + b) / 2.0 {
        2.0 * ((x - a) / (b - a)).powi(2)
    } else {
        1.0 - 2.0 * ((x - b) / (b - a)).powi(2)
    }
}

/// Fuzzy set with a name and membership function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzySet {
    /// Name of the fuzzy set
    #[serde(alias = "label")]
    pub name: String,
    /// Membership function
    #[serde(flatten)]
    pub function: MembershipFunction,
}

impl FuzzySet {
    /// Create a new fuzzy set
    pub fn new(name: impl Into<String>, function: MembershipFunction) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    /// Get membership degree for a value
    pub fn membership(&self, x: f64) -> f64 {
        self.function.membership(x)
    }

    /// Get the support (sampled values where membership > 0)
    pub fn support(&self, min: f64, max: f64, num_points: usize) -> Vec<f64> {
        sample(min, max, num_points)
            .filter(|&x| self.membership(x) > 1e-10)
            .collect()
    }

    /// Get the core (sampled values where membership = 1)
    pub fn core(&self, min: f64, max: f64, num_points: usize) -> Vec<f64> {
        sample(min, max, num_points)
            .filter(|&x| (self.membership(x) - 1.0).abs() < 1e-10)
            .collect()
    }
}

fn sample(min: f64, max: f64, num_points: usize) -> impl Iterator<Item = f64> {
    let step = if num_points > 1 {
        (max - min) / ((num_points - 1) as f64)
    } else {
        0.0
    };
    (0..num_points).map(move |i| min + step * (i as f64))
}
