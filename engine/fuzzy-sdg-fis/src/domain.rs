//! Discretised crisp domains

use crate::error::{FisError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Default number of samples used when discretising a domain
pub const DEFAULT_STEPS: usize = 1000;

/// A closed float interval sampled at `steps` evenly spaced points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatDomain {
    /// Domain (and variable) name
    pub name: String,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Number of samples, both bounds included
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_steps() -> usize {
    DEFAULT_STEPS
}

impl FloatDomain {
    /// Create a new domain
    pub fn new(name: impl Into<String>, min: f64, max: f64, steps: usize) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            steps,
        }
    }

    /// Check bounds and resolution
    pub fn validate(&self) -> Result<()> {
        let reason = if !self.min.is_finite() || !self.max.is_finite() {
            Some("bounds must be finite".to_string())
        } else if self.min >= self.max {
            Some(format!("min {} must be below max {}", self.min, self.max))
        } else if self.steps < 2 {
            Some(format!("needs at least 2 steps, got {}", self.steps))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(FisError::InvalidDomain {
                name: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Sample points from `min` to `max` inclusive
    pub fn grid(&self) -> Array1<f64> {
        Array1::linspace(self.min, self.max, self.steps)
    }

    /// Distance between two consecutive samples
    pub fn step(&self) -> f64 {
        (self.max - self.min) / ((self.steps.max(2) - 1) as f64)
    }

    /// Whether a crisp value lies inside the domain
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamp a crisp value into the domain
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}
