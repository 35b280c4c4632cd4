//! Fuzzy propositions
//!
//! Antecedents are trees of atomic "variable is label" statements combined
//! with AND, OR and NOT. They are evaluated against the fuzzified inputs
//! using the configured t-norm and t-conorm.

use crate::error::{FisError, Result};
use crate::norms::{TConorm, TNorm};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Fuzzified inputs: variable name -> label -> membership degree
pub type Memberships = HashMap<String, IndexMap<String, f64>>;

/// Fuzzy proposition
#[derive(Debug, Clone, PartialEq)]
pub enum Proposition {
    /// Atomic statement `variable is label`
    Is { variable: String, label: String },
    /// Negation
    Not(Box<Proposition>),
    /// Conjunction of every operand
    All(Vec<Proposition>),
    /// Disjunction of every operand
    Any(Vec<Proposition>),
}

impl Proposition {
    /// Atomic statement `variable is label`
    pub fn is(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Proposition::Is {
            variable: variable.into(),
            label: label.into(),
        }
    }

    /// `self AND other`
    pub fn and(self, other: Proposition) -> Self {
        match self {
            Proposition::All(mut operands) => {
                operands.push(other);
                Proposition::All(operands)
            }
            first => Proposition::All(vec![first, other]),
        }
    }

    /// `self OR other`
    pub fn or(self, other: Proposition) -> Self {
        match self {
            Proposition::Any(mut operands) => {
                operands.push(other);
                Proposition::Any(operands)
            }
            first => Proposition::Any(vec![first, other]),
        }
    }

    /// `NOT self`
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Proposition::Not(Box::new(self))
    }

    /// Conjunction of every proposition, `None` when there are none
    pub fn all(propositions: impl IntoIterator<Item = Proposition>) -> Option<Self> {
        Self::combine(propositions, Proposition::All)
    }

    /// Disjunction of every proposition, `None` when there are none
    pub fn any(propositions: impl IntoIterator<Item = Proposition>) -> Option<Self> {
        Self::combine(propositions, Proposition::Any)
    }

    fn combine(
        propositions: impl IntoIterator<Item = Proposition>,
        wrap: fn(Vec<Proposition>) -> Proposition,
    ) -> Option<Self> {
        let mut operands: Vec<_> = propositions.into_iter().collect();
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(wrap(operands)),
        }
    }

    /// Truth degree of the proposition for the given memberships
    pub fn evaluate(&self, memberships: &Memberships, t_norm: TNorm, t_conorm: TConorm) -> Result<f64> {
        match self {
            Proposition::Is { variable, label } => {
                let degrees = memberships
                    .get(variable)
                    .ok_or_else(|| FisError::MissingInput(variable.clone()))?;
                degrees
                    .get(label)
                    .copied()
                    .ok_or_else(|| FisError::UnknownLabel {
                        variable: variable.clone(),
                        label: label.clone(),
                    })
            }
            Proposition::Not(inner) => Ok(1.0 - inner.evaluate(memberships, t_norm, t_conorm)?),
            Proposition::All(operands) => operands.iter().try_fold(1.0, |acc, p| -> Result<f64> {
                Ok(t_norm.apply(acc, p.evaluate(memberships, t_norm, t_conorm)?))
            }),
            Proposition::Any(operands) => operands.iter().try_fold(0.0, |acc, p| -> Result<f64> {
                Ok(t_conorm.apply(acc, p.evaluate(memberships, t_norm, t_conorm)?))
            }),
        }
    }

    /// Every atomic `(variable, label)` pair in the proposition
    pub fn atoms(&self) -> Vec<(&str, &str)> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Proposition::Is { variable, label } => atoms.push((variable.as_str(), label.as_str())),
            Proposition::Not(inner) => inner.collect_atoms(atoms),
            Proposition::All(operands) | Proposition::Any(operands) => {
                for operand in operands {
                    operand.collect_atoms(atoms);
                }
            }
        }
    }

    /// Names of the variables referenced by the proposition
    pub fn variables(&self) -> BTreeSet<&str> {
        self.atoms().into_iter().map(|(variable, _)| variable).collect()
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposition::All(_) | Proposition::Any(_) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposition::Is { variable, label } => write!(f, "{variable} is \"{label}\""),
            Proposition::Not(inner) => {
                write!(f, "NOT ")?;
                inner.fmt_operand(f)
            }
            Proposition::All(operands) | Proposition::Any(operands) => {
                let joiner = if matches!(self, Proposition::All(_)) {
                    " AND "
                } else {
                    " OR "
                };
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(joiner)?;
                    }
                    operand.fmt_operand(f)?;
                }
                Ok(())
            }
        }
    }
}
