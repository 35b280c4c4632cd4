//! Linguistic variables
//!
//! A [`FuzzyVariable`] pairs a crisp [`FloatDomain`] with an ordered list of
//! linguistic values. The order is significant: automatic rule generation
//! maps the i-th value of an input onto the i-th value of the output.

use crate::domain::FloatDomain;
use crate::error::{FisError, Result};
use crate::membership::{FuzzySet, MembershipFunction};
use crate::proposition::Proposition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fuzzy variable with domain and associated fuzzy values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyVariable {
    /// Crisp domain of the variable
    pub domain: FloatDomain,
    /// Linguistic values in definition order
    pub values: IndexMap<String, MembershipFunction>,
}

impl FuzzyVariable {
    /// Create a variable with no linguistic values yet
    pub fn new(domain: FloatDomain) -> Self {
        Self {
            domain,
            values: IndexMap::new(),
        }
    }

    /// Append a linguistic value
    pub fn with_value(mut self, label: impl Into<String>, function: MembershipFunction) -> Self {
        self.values.insert(label.into(), function);
        self
    }

    /// Create a variable from a list of fuzzy sets, keeping their order
    pub fn from_sets(domain: FloatDomain, sets: impl IntoIterator<Item = FuzzySet>) -> Self {
        let values = sets
            .into_iter()
            .map(|set| (set.name, set.function))
            .collect();
        Self { domain, values }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.domain.name
    }

    /// Linguistic labels in definition order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of linguistic values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the variable has no linguistic values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a label is defined
    pub fn has_label(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    /// Membership function for a label
    pub fn value(&self, label: &str) -> Result<&MembershipFunction> {
        self.values.get(label).ok_or_else(|| FisError::UnknownLabel {
            variable: self.name().to_string(),
            label: label.to_string(),
        })
    }

    /// Membership degree of `x` in every linguistic value
    ///
    /// Values outside the domain are clamped to its bounds.
    pub fn fuzzify(&self, x: f64) -> IndexMap<String, f64> {
        let x = if self.domain.contains(x) {
            x
        } else {
            let clamped = self.domain.clamp(x);
            warn!(
                "Input {} = {} outside [{}, {}], clamped to {}",
                self.name(),
                x,
                self.domain.min,
                self.domain.max,
                clamped
            );
            clamped
        };

        self.values
            .iter()
            .map(|(label, function)| (label.clone(), function.membership(x)))
            .collect()
    }

    /// Proposition "`self` is `label`"
    pub fn is(&self, label: &str) -> Result<Proposition> {
        self.value(label)?;
        Ok(Proposition::is(self.name(), label))
    }

    /// Check the domain and every membership function
    pub fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        if self.values.is_empty() {
            return Err(FisError::InvalidVariables(format!(
                "variable '{}' defines no fuzzy values",
                self.name()
            )));
        }
        for (label, function) in &self.values {
            function.validate().map_err(|e| {
                FisError::InvalidMembership(format!("{}.{}: {}", self.name(), label, e))
            })?;
        }
        Ok(())
    }
}
