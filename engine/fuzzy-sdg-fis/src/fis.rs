//! # Mamdani Inference System
//!
//! Evaluation proceeds in four steps:
//!
//! 1. **Fuzzification**: every crisp input is mapped to membership degrees
//!    in the linguistic values of its variable.
//! 2. **Rule evaluation**: each antecedent is evaluated with the t-norm /
//!    t-conorm pair and scaled by the rule weight.
//! 3. **Implication and aggregation**: the consequent set of each rule is
//!    clipped at its firing strength and the clipped sets are merged with the
//!    t-conorm.
//! 4. **Defuzzification**: the aggregated set, sampled on the output domain,
//!    is reduced to a crisp value (centroid by default).
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sdg_fis::domain::FloatDomain;
//! use fuzzy_sdg_fis::fis::FuzzyInferenceSystem;
//! use fuzzy_sdg_fis::membership::MembershipFunction;
//! use fuzzy_sdg_fis::rule::FuzzyRuleSet;
//! use fuzzy_sdg_fis::variable::FuzzyVariable;
//! use indexmap::IndexMap;
//! use std::collections::HashMap;
//!
//! let temperature = FuzzyVariable::new(FloatDomain::new("temperature", 0.0, 40.0, 401))
//!     .with_value("cold", MembershipFunction::Z { a: 10.0, b: 30.0 })
//!     .with_value("hot", MembershipFunction::S { a: 10.0, b: 30.0 });
//! let fan = FuzzyVariable::new(FloatDomain::new("fan_speed", 0.0, 100.0, 1000))
//!     .with_value("low", MembershipFunction::Z { a: 20.0, b: 60.0 })
//!     .with_value("high", MembershipFunction::S { a: 40.0, b: 80.0 });
//!
//! let rules = FuzzyRuleSet::automatic(&temperature, &fan, false, 1.0)?;
//! let mut inputs = IndexMap::new();
//! inputs.insert("temperature".to_string(), temperature);
//! let fis = FuzzyInferenceSystem::new(inputs, rules, fan)?;
//!
//! let speed = fis.crisp_output(&HashMap::from([("temperature".to_string(), 35.0)]))?;
//! assert!(speed > 50.0);
//! # Ok::<(), fuzzy_sdg_fis::FisError>(())
//! ```

use crate::defuzz::DefuzzificationMethod;
use crate::error::{FisError, Result};
use crate::norms::{TConorm, TNorm};
use crate::proposition::Memberships;
use crate::rule::FuzzyRuleSet;
use crate::variable::FuzzyVariable;
use indexmap::IndexMap;
use ndarray::{Array1, Zip};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Result of a single inference with its intermediate values
#[derive(Debug, Clone)]
pub struct Inference {
    /// Defuzzified output
    pub crisp: f64,
    /// Weighted firing strength of each rule, in rule order
    pub firing: Vec<f64>,
    /// Aggregated output membership sampled on the output grid
    pub aggregated: Array1<f64>,
}

/// Mamdani-style fuzzy inference system with a single output
#[derive(Debug, Clone)]
pub struct FuzzyInferenceSystem {
    /// Input variables
    inputs: IndexMap<String, FuzzyVariable>,
    /// Fuzzy rules
    rules: FuzzyRuleSet,
    /// Output variable
    output: FuzzyVariable,
    /// T-norm (AND operation)
    t_norm: TNorm,
    /// T-conorm (OR operation and aggregation)
    t_conorm: TConorm,
    /// Defuzzification method
    defuzz_method: DefuzzificationMethod,
    /// Output domain samples
    grid: Array1<f64>,
    /// Output linguistic values sampled on `grid`
    output_curves: HashMap<String, Array1<f64>>,
}

impl FuzzyInferenceSystem {
    /// Build a system, checking that every rule refers to known variables
    pub fn new(
        inputs: IndexMap<String, FuzzyVariable>,
        rules: FuzzyRuleSet,
        output: FuzzyVariable,
    ) -> Result<Self> {
        output.validate()?;
        for variable in inputs.values() {
            variable.validate()?;
        }

        for rule in &rules {
            for (name, label) in rule.antecedent.atoms() {
                let variable = inputs
                    .get(name)
                    .ok_or_else(|| FisError::UnknownVariable(name.to_string()))?;
                variable.value(label)?;
            }
            if rule.consequent.variable != output.name() {
                return Err(FisError::InvalidRule(format!(
                    "consequent targets '{}' but the output variable is '{}'",
                    rule.consequent.variable,
                    output.name()
                )));
            }
            output.value(&rule.consequent.label)?;
        }

        let grid = output.domain.grid();
        let output_curves = output
            .values
            .iter()
            .map(|(label, function)| (label.clone(), grid.mapv(|x| function.membership(x))))
            .collect();

        debug!(
            "Built inference system: {} inputs, {} rules, output '{}'",
            inputs.len(),
            rules.len(),
            output.name()
        );

        Ok(Self {
            inputs,
            rules,
            output,
            t_norm: TNorm::default(),
            t_conorm: TConorm::default(),
            defuzz_method: DefuzzificationMethod::default(),
            grid,
            output_curves,
        })
    }

    /// Set T-norm
    pub fn with_t_norm(mut self, t_norm: TNorm) -> Self {
        self.t_norm = t_norm;
        self
    }

    /// Set T-conorm
    pub fn with_t_conorm(mut self, t_conorm: TConorm) -> Self {
        self.t_conorm = t_conorm;
        self
    }

    /// Set defuzzification method
    pub fn with_defuzzification(mut self, method: DefuzzificationMethod) -> Self {
        self.defuzz_method = method;
        self
    }

    /// Input variables
    pub fn inputs(&self) -> &IndexMap<String, FuzzyVariable> {
        &self.inputs
    }

    /// Output variable
    pub fn output(&self) -> &FuzzyVariable {
        &self.output
    }

    /// Rule set
    pub fn rules(&self) -> &FuzzyRuleSet {
        &self.rules
    }

    /// Output domain samples
    pub fn grid(&self) -> &Array1<f64> {
        &self.grid
    }

    /// Human readable rules, in evaluation order
    pub fn describe_rules(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }

    /// Fuzzify the crisp inputs that belong to a known variable
    pub fn fuzzify(&self, crisp: &HashMap<String, f64>) -> Memberships {
        crisp
            .iter()
            .filter_map(|(name, &value)| match self.inputs.get(name) {
                Some(variable) => Some((name.clone(), variable.fuzzify(value))),
                None => {
                    trace!("Ignoring crisp value for unknown variable '{}'", name);
                    None
                }
            })
            .collect()
    }

    /// Perform fuzzy inference, keeping intermediate results
    pub fn evaluate(&self, crisp: &HashMap<String, f64>) -> Result<Inference> {
        // Step 1: Fuzzification
        let memberships = self.fuzzify(crisp);

        // Step 2: Rule evaluation
        let firing = self
            .rules
            .iter()
            .map(|rule| -> Result<f64> {
                let strength = rule
                    .antecedent
                    .evaluate(&memberships, self.t_norm, self.t_conorm)?;
                Ok(strength * rule.weight)
            })
            .collect::<Result<Vec<f64>>>()?;

        // Step 3: Implication (min) and aggregation (t-conorm)
        let mut aggregated = Array1::<f64>::zeros(self.grid.len());
        for (rule, &strength) in self.rules.iter().zip(&firing) {
            if strength <= 0.0 {
                continue;
            }
            let curve = self
                .output_curves
                .get(&rule.consequent.label)
                .ok_or_else(|| FisError::UnknownLabel {
                    variable: self.output.name().to_string(),
                    label: rule.consequent.label.clone(),
                })?;
            let t_conorm = self.t_conorm;
            Zip::from(&mut aggregated)
                .and(curve)
                .for_each(|agg, &mu| *agg = t_conorm.apply(*agg, mu.min(strength)));
        }

        // Step 4: Defuzzification
        let crisp = self.defuzz_method.defuzzify(&self.grid, &aggregated)?;
        trace!("Firing strengths {:?} -> {}", firing, crisp);

        Ok(Inference {
            crisp,
            firing,
            aggregated,
        })
    }

    /// Perform fuzzy inference and return the crisp output
    pub fn crisp_output(&self, crisp: &HashMap<String, f64>) -> Result<f64> {
        self.evaluate(crisp).map(|inference| inference.crisp)
    }
}
