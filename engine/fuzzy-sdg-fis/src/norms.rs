//! T-norms and t-conorms used to combine membership degrees

use serde::{Deserialize, Serialize};

/// T-norm (fuzzy AND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNorm {
    /// Minimum: min(a, b)
    #[default]
    Min,
    /// Product: a * b
    Product,
    /// Lukasiewicz: max(0, a + b - 1)
    Lukasiewicz,
}

impl TNorm {
    /// Apply the T-norm
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Min => a.min(b),
            TNorm::Product => a * b,
            TNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
        }
    }
}

/// T-conorm (fuzzy OR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TConorm {
    /// Maximum: max(a, b)
    #[default]
    Max,
    /// Probabilistic sum: a + b - a*b
    ProbabilisticSum,
    /// Bounded sum: min(1, a + b)
    BoundedSum,
}

impl TConorm {
    /// Apply the T-conorm
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            TConorm::Max => a.max(b),
            TConorm::ProbabilisticSum => a + b - a * b,
            TConorm::BoundedSum => (a + b).min(1.0),
        }
    }
}
