//! # Fuzzy Rules
//!
//! IF-THEN rules with a proposition as antecedent and a single linguistic
//! value of the output variable as consequent. Rules carry a weight in
//! `[0, 1]` that scales their firing strength.
//!
//! [`FuzzyRuleSet::automatic`] builds the monotonic rule block relating one
//! input variable to the output: the i-th linguistic value of the input
//! implies the i-th value of the output (or the i-th from the end when the
//! block is reversed).

use crate::error::{FisError, Result};
use crate::proposition::Proposition;
use crate::variable::FuzzyVariable;
use std::fmt;
use tracing::debug;

/// Right-hand side of a rule: `variable is label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consequent {
    /// Output variable name
    pub variable: String,
    /// Output linguistic value
    pub label: String,
}

impl fmt::Display for Consequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is \"{}\"", self.variable, self.label)
    }
}

/// Fuzzy IF-THEN rule
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyRule {
    /// Antecedent proposition
    pub antecedent: Proposition,
    /// Consequent linguistic value
    pub consequent: Consequent,
    /// Rule weight (default: 1.0)
    pub weight: f64,
}

impl FuzzyRule {
    /// Create a rule, rejecting weights outside `[0, 1]`
    pub fn new(antecedent: Proposition, output: &FuzzyVariable, label: &str, weight: f64) -> Result<Self> {
        validate_weight(weight)?;
        output.value(label)?;
        Ok(Self {
            antecedent,
            consequent: Consequent {
                variable: output.name().to_string(),
                label: label.to_string(),
            },
            weight,
        })
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF {} THEN {}", self.antecedent, self.consequent)?;
        if (self.weight - 1.0).abs() > f64::EPSILON {
            write!(f, " [weight {}]", self.weight)?;
        }
        Ok(())
    }
}

/// Check that a rule weight is finite and in `[0, 1]`
pub fn validate_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(FisError::InvalidWeight(weight))
    }
}

/// Ordered collection of fuzzy rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuzzyRuleSet {
    rules: Vec<FuzzyRule>,
}

impl FuzzyRuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic rules relating `input` to `output`
    ///
    /// With `n` input values and `m` output values, input value `i` implies
    /// output value `round(i * (m - 1) / (n - 1))`, mirrored when `reverse`
    /// is set.
    pub fn automatic(
        input: &FuzzyVariable,
        output: &FuzzyVariable,
        reverse: bool,
        weight: f64,
    ) -> Result<Self> {
        validate_weight(weight)?;
        if input.is_empty() || output.is_empty() {
            return Err(FisError::InvalidRule(format!(
                "cannot relate '{}' to '{}': both variables need fuzzy values",
                input.name(),
                output.name()
            )));
        }

        let n_in = input.len();
        let n_out = output.len();
        let out_labels: Vec<&str> = output.labels().collect();

        let rules = input
            .labels()
            .enumerate()
            .map(|(i, label)| {
                let mut j = if n_in == 1 {
                    0
                } else {
                    ((i * (n_out - 1)) as f64 / (n_in - 1) as f64).round() as usize
                };
                if reverse {
                    j = n_out - 1 - j;
                }
                FuzzyRule {
                    antecedent: Proposition::is(input.name(), label),
                    consequent: Consequent {
                        variable: output.name().to_string(),
                        label: out_labels[j].to_string(),
                    },
                    weight,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Generated {} automatic rules for '{}' (reverse: {}, weight: {})",
            rules.len(),
            input.name(),
            reverse,
            weight
        );

        Ok(Self { rules })
    }

    /// Add a rule
    pub fn push(&mut self, rule: FuzzyRule) {
        self.rules.push(rule);
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in order
    pub fn iter(&self) -> std::slice::Iter<'_, FuzzyRule> {
        self.rules.iter()
    }

    /// Rules as a slice
    pub fn as_slice(&self) -> &[FuzzyRule] {
        &self.rules
    }
}

impl Extend<FuzzyRule> for FuzzyRuleSet {
    fn extend<T: IntoIterator<Item = FuzzyRule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

impl FromIterator<FuzzyRule> for FuzzyRuleSet {
    fn from_iter<T: IntoIterator<Item = FuzzyRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FuzzyRuleSet {
    type Item = FuzzyRule;
    type IntoIter = std::vec::IntoIter<FuzzyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a FuzzyRuleSet {
    type Item = &'a FuzzyRule;
    type IntoIter = std::slice::Iter<'a, FuzzyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for FuzzyRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, rule)?;
        }
        Ok(())
    }
}
