//! # Variable-set Fuzzy Inference
//!
//! [`VariableFis`] evaluates a compliance degree from whatever subset of the
//! configured indicators is available for a given record. For every
//! prediction it:
//!
//! 1. drops missing values (`None` or NaN),
//! 2. selects the configured input variables present in the record, skipping
//!    fields that are not configured inputs,
//! 3. regenerates the rule base for that selection, and
//! 4. evaluates a Mamdani system with centroid defuzzification.
//!
//! The rule base consists of one automatic block per input (reversed blocks
//! first), followed by two aggregate rules:
//!
//! - **green**: every input is "SDG achieved" ⇒ "SDG achieved"
//! - **red**: any two inputs are both "Major challenges remain" ⇒
//!   "Major challenges remain"
//!
//! The aggregate rules are only added together; when one of them cannot be
//! built (for instance with a single input) both are left out.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sdg_fis::sdg;
//! use fuzzy_sdg_fis::variable_fis::{Record, VariableFis, VariableSpec};
//! use indexmap::IndexMap;
//!
//! let mut specs = IndexMap::new();
//! specs.insert("housing".to_string(), VariableSpec::input(sdg::indicator("housing")));
//! specs.insert("transport".to_string(), VariableSpec::input(sdg::indicator("transport")));
//! specs.insert(
//!     sdg::COMPLIANCE_DEGREE.to_string(),
//!     VariableSpec::output(sdg::compliance_degree()),
//! );
//! let fis = VariableFis::new(specs)?;
//!
//! let record = Record::from([
//!     ("housing".to_string(), Some(92.0)),
//!     ("transport".to_string(), None),
//! ]);
//! let degree = fis.predict(&record)?;
//! assert!(degree > 75.0);
//! # Ok::<(), fuzzy_sdg_fis::FisError>(())
//! ```

use crate::defuzz::DefuzzificationMethod;
use crate::error::{FisError, Result};
use crate::fis::FuzzyInferenceSystem;
use crate::norms::{TConorm, TNorm};
use crate::proposition::Proposition;
use crate::rule::{validate_weight, FuzzyRule, FuzzyRuleSet};
use crate::sdg::{MAJOR_CHALLENGES_REMAIN, SDG_ACHIEVED};
use crate::variable::FuzzyVariable;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Crisp indicator values by variable name; `None` marks a missing value
pub type Record = HashMap<String, Option<f64>>;

/// Role of a variable in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Crisp indicator input
    Input,
    /// Defuzzified output
    Output,
}

/// A variable together with how it takes part in rule generation
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    /// Input or output
    pub kind: VariableKind,
    /// Linguistic variable
    pub fuzzy_variable: FuzzyVariable,
    /// Weight of the automatic rules generated for this input
    pub weight: f64,
    /// Map the input's values onto the output in reverse order
    pub reverse: bool,
}

impl VariableSpec {
    /// Input variable with weight 1 and natural order
    pub fn input(fuzzy_variable: FuzzyVariable) -> Self {
        Self {
            kind: VariableKind::Input,
            fuzzy_variable,
            weight: 1.0,
            reverse: false,
        }
    }

    /// Output variable
    pub fn output(fuzzy_variable: FuzzyVariable) -> Self {
        Self {
            kind: VariableKind::Output,
            fuzzy_variable,
            weight: 1.0,
            reverse: false,
        }
    }

    /// Set the rule weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set whether the automatic rules are reversed
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Operators and aggregate rule weight used by every generated system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    /// Fuzzy AND
    pub t_norm: TNorm,
    /// Fuzzy OR and aggregation
    pub t_conorm: TConorm,
    /// Defuzzification method
    pub defuzzification: DefuzzificationMethod,
    /// Weight of the green and red rules
    pub aggregate_rule_weight: f64,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            t_norm: TNorm::Min,
            t_conorm: TConorm::Max,
            defuzzification: DefuzzificationMethod::Centroid,
            aggregate_rule_weight: 1.0,
        }
    }
}

/// Firing strength of one rule in an explained prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleActivation {
    /// Rule text
    pub rule: String,
    /// Weighted firing strength
    pub firing: f64,
}

/// A prediction with the selection and rule activity that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// Defuzzified output
    pub compliance_degree: f64,
    /// Input variables used, in configuration order
    pub variables: Vec<String>,
    /// Values that were dropped as missing
    pub dropped: Vec<String>,
    /// Record fields that are not configured inputs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
    /// Every rule of the generated system
    pub rules: Vec<RuleActivation>,
}

/// Fuzzy inference system over a variable set chosen per prediction
#[derive(Debug, Clone)]
pub struct VariableFis {
    inputs: IndexMap<String, VariableSpec>,
    output: FuzzyVariable,
    settings: InferenceSettings,
    /// System over every configured input
    fis: FuzzyInferenceSystem,
}

impl VariableFis {
    /// Build the system with default operators
    pub fn new(variables: IndexMap<String, VariableSpec>) -> Result<Self> {
        Self::with_settings(variables, InferenceSettings::default())
    }

    /// Build the system with explicit operators
    pub fn with_settings(
        variables: IndexMap<String, VariableSpec>,
        settings: InferenceSettings,
    ) -> Result<Self> {
        validate_weight(settings.aggregate_rule_weight)?;

        let mut inputs = IndexMap::new();
        let mut output: Option<FuzzyVariable> = None;

        for (name, spec) in variables {
            if name != spec.fuzzy_variable.name() {
                return Err(FisError::InvalidVariables(format!(
                    "variable registered as '{}' is named '{}'",
                    name,
                    spec.fuzzy_variable.name()
                )));
            }
            match spec.kind {
                VariableKind::Input => {
                    validate_weight(spec.weight)?;
                    inputs.insert(name, spec);
                }
                VariableKind::Output if output.is_none() => output = Some(spec.fuzzy_variable),
                VariableKind::Output => {
                    warn!("Ignoring additional output variable '{}'", name);
                }
            }
        }

        let output = output
            .ok_or_else(|| FisError::InvalidVariables("no output variable defined".into()))?;
        if inputs.is_empty() {
            return Err(FisError::InvalidVariables("no input variables defined".into()));
        }

        let all: Vec<&str> = inputs.keys().map(String::as_str).collect();
        let fis = build_fis(&inputs, &output, &settings, &all)?;

        Ok(Self {
            inputs,
            output,
            settings,
            fis,
        })
    }

    /// Configured input variables
    pub fn inputs(&self) -> &IndexMap<String, VariableSpec> {
        &self.inputs
    }

    /// Output variable
    pub fn output(&self) -> &FuzzyVariable {
        &self.output
    }

    /// Operators in use
    pub fn settings(&self) -> &InferenceSettings {
        &self.settings
    }

    /// System over every configured input
    pub fn fis(&self) -> &FuzzyInferenceSystem {
        &self.fis
    }

    /// Rule base over every configured input
    pub fn rules(&self) -> &FuzzyRuleSet {
        self.fis.rules()
    }

    /// Rule base for a selection of input variables
    pub fn generate_rules(&self, selection: &[&str]) -> Result<FuzzyRuleSet> {
        generate_rules(&self.inputs, &self.output, &self.settings, selection)
    }

    /// Predict the compliance degree for a record
    pub fn predict(&self, record: &Record) -> Result<f64> {
        let (crisp, _, _) = self.usable_inputs(record)?;
        self.fis_for(&crisp)?.crisp_output(&crisp)
    }

    /// Predict the compliance degree and report how it was obtained
    pub fn explain(&self, record: &Record) -> Result<Explanation> {
        let (crisp, dropped, ignored) = self.usable_inputs(record)?;
        let fis = self.fis_for(&crisp)?;
        let inference = fis.evaluate(&crisp)?;

        Ok(Explanation {
            compliance_degree: inference.crisp,
            variables: fis.inputs().keys().cloned().collect(),
            dropped,
            ignored,
            rules: fis
                .rules()
                .iter()
                .zip(inference.firing)
                .map(|(rule, firing)| RuleActivation {
                    rule: rule.to_string(),
                    firing,
                })
                .collect(),
        })
    }

    /// Predict every record in parallel, keeping the input order
    pub fn predict_batch(&self, records: &[Record]) -> Vec<Result<f64>> {
        records.par_iter().map(|record| self.predict(record)).collect()
    }

    /// Split a record into usable values, missing inputs and unrelated fields
    fn usable_inputs(&self, record: &Record) -> Result<(HashMap<String, f64>, Vec<String>, Vec<String>)> {
        let mut crisp = HashMap::with_capacity(record.len());
        let mut dropped = Vec::new();
        let mut ignored = Vec::new();

        for (name, value) in record {
            if !self.inputs.contains_key(name) {
                debug!("Ignoring field '{}': not a configured input", name);
                ignored.push(name.clone());
                continue;
            }
            match value {
                Some(v) if !v.is_nan() => {
                    crisp.insert(name.clone(), *v);
                }
                _ => dropped.push(name.clone()),
            }
        }

        if crisp.is_empty() {
            return Err(FisError::NoInputs);
        }
        dropped.sort();
        ignored.sort();
        Ok((crisp, dropped, ignored))
    }

    /// System restricted to the variables present in `crisp`
    fn fis_for(&self, crisp: &HashMap<String, f64>) -> Result<Cow<'_, FuzzyInferenceSystem>> {
        let selection: Vec<&str> = self
            .inputs
            .keys()
            .filter(|name| crisp.contains_key(name.as_str()))
            .map(String::as_str)
            .collect();

        if selection.len() == self.inputs.len() {
            return Ok(Cow::Borrowed(&self.fis));
        }

        debug!(
            "Selected {}/{} input variables: {:?}",
            selection.len(),
            self.inputs.len(),
            selection
        );
        build_fis(&self.inputs, &self.output, &self.settings, &selection).map(Cow::Owned)
    }
}

fn build_fis(
    inputs: &IndexMap<String, VariableSpec>,
    output: &FuzzyVariable,
    settings: &InferenceSettings,
    selection: &[&str],
) -> Result<FuzzyInferenceSystem> {
    let rules = generate_rules(inputs, output, settings, selection)?;
    let variables = selected(inputs, selection)?
        .into_iter()
        .map(|spec| (spec.fuzzy_variable.name().to_string(), spec.fuzzy_variable.clone()))
        .collect();

    Ok(FuzzyInferenceSystem::new(variables, rules, output.clone())?
        .with_t_norm(settings.t_norm)
        .with_t_conorm(settings.t_conorm)
        .with_defuzzification(settings.defuzzification))
}

fn selected<'a>(
    inputs: &'a IndexMap<String, VariableSpec>,
    selection: &[&str],
) -> Result<Vec<&'a VariableSpec>> {
    selection
        .iter()
        .map(|name| {
            inputs
                .get(*name)
                .ok_or_else(|| FisError::UnknownVariable(name.to_string()))
        })
        .collect()
}

fn generate_rules(
    inputs: &IndexMap<String, VariableSpec>,
    output: &FuzzyVariable,
    settings: &InferenceSettings,
    selection: &[&str],
) -> Result<FuzzyRuleSet> {
    let specs = selected(inputs, selection)?;
    let mut rules = FuzzyRuleSet::new();

    // Reversed blocks first, then the natural-order ones
    for reverse in [true, false] {
        for spec in specs.iter().filter(|spec| spec.reverse == reverse) {
            rules.extend(FuzzyRuleSet::automatic(
                &spec.fuzzy_variable,
                output,
                spec.reverse,
                spec.weight,
            )?);
        }
    }

    let variables: Vec<&FuzzyVariable> = specs.iter().map(|spec| &spec.fuzzy_variable).collect();
    let weight = settings.aggregate_rule_weight;
    match (
        green_rule(&variables, output, weight),
        red_rule(&variables, output, weight),
    ) {
        (Ok(green), Ok(red)) => {
            rules.push(green);
            rules.push(red);
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Skipping green and red rules: {}", e);
        }
    }

    debug!("Generated {} rules for {} inputs", rules.len(), specs.len());
    Ok(rules)
}

/// If every input is "SDG achieved" then the output is "SDG achieved"
pub fn green_rule(inputs: &[&FuzzyVariable], output: &FuzzyVariable, weight: f64) -> Result<FuzzyRule> {
    let antecedents = inputs
        .iter()
        .map(|variable| variable.is(SDG_ACHIEVED))
        .collect::<Result<Vec<_>>>()?;
    let antecedent = Proposition::all(antecedents)
        .ok_or_else(|| FisError::InvalidRule("green rule needs at least one input".into()))?;

    FuzzyRule::new(antecedent, output, SDG_ACHIEVED, weight)
}

/// If any two inputs are "Major challenges remain" then so is the output
pub fn red_rule(inputs: &[&FuzzyVariable], output: &FuzzyVariable, weight: f64) -> Result<FuzzyRule> {
    let antecedents = inputs
        .iter()
        .map(|variable| variable.is(MAJOR_CHALLENGES_REMAIN))
        .collect::<Result<Vec<_>>>()?;

    let pairs = antecedents.iter().enumerate().flat_map(|(i, first)| {
        antecedents[i + 1..]
            .iter()
            .map(move |second| first.clone().and(second.clone()))
    });
    let antecedent = Proposition::any(pairs)
        .ok_or_else(|| FisError::InvalidRule("red rule needs at least two inputs".into()))?;

    FuzzyRule::new(antecedent, output, MAJOR_CHALLENGES_REMAIN, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FloatDomain;
    use crate::membership::MembershipFunction;
    use crate::sdg::{self, COMPLIANCE_DEGREE};

    fn specs(names: &[&str]) -> IndexMap<String, VariableSpec> {
        let mut specs: IndexMap<String, VariableSpec> = names
            .iter()
            .map(|name| (name.to_string(), VariableSpec::input(sdg::indicator(*name))))
            .collect();
        specs.insert(
            COMPLIANCE_DEGREE.to_string(),
            VariableSpec::output(sdg::compliance_degree()),
        );
        specs
    }

    fn record(values: &[(&str, Option<f64>)]) -> Record {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_requires_output_and_inputs() {
        let only_inputs: IndexMap<_, _> = specs(&["a"])
            .into_iter()
            .filter(|(_, s)| s.kind == VariableKind::Input)
            .collect();
        assert!(matches!(
            VariableFis::new(only_inputs),
            Err(FisError::InvalidVariables(_))
        ));
        assert!(matches!(
            VariableFis::new(specs(&[])),
            Err(FisError::InvalidVariables(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_names() {
        let mut variables = specs(&["a"]);
        variables.insert("b".to_string(), VariableSpec::input(sdg::indicator("not_b")));
        assert!(VariableFis::new(variables).is_err());
    }

    #[test]
    fn test_full_rule_base_layout() {
        let mut variables = specs(&["a", "b", "c"]);
        variables["b"].reverse = true;
        let fis = VariableFis::new(variables).unwrap();

        // 3 automatic blocks of 4 rules, then green and red
        let rules = fis.rules().as_slice();
        assert_eq!(rules.len(), 14);
        assert_eq!(rules[0].antecedent, Proposition::is("b", SDG_ACHIEVED));
        assert_eq!(rules[0].consequent.label, MAJOR_CHALLENGES_REMAIN);
        assert_eq!(rules[4].antecedent, Proposition::is("a", SDG_ACHIEVED));
        assert_eq!(rules[12].consequent.label, SDG_ACHIEVED);
        assert_eq!(rules[13].consequent.label, MAJOR_CHALLENGES_REMAIN);
    }

    #[test]
    fn test_red_rule_covers_every_pair() {
        let vars: Vec<FuzzyVariable> = ["a", "b", "c"].iter().map(|n| sdg::indicator(*n)).collect();
        let refs: Vec<&FuzzyVariable> = vars.iter().collect();
        let rule = red_rule(&refs, &sdg::compliance_degree(), 1.0).unwrap();

        match &rule.antecedent {
            Proposition::Any(pairs) => assert_eq!(pairs.len(), 3),
            other => panic!("expected disjunction, got {other:?}"),
        }
        assert!(rule.to_string().contains("(b is \"Major challenges remain\" AND c is"));
    }

    #[test]
    fn test_aggregate_rules_need_two_inputs() {
        let fis = VariableFis::new(specs(&["a"])).unwrap();
        assert_eq!(fis.rules().len(), 4);

        let single = sdg::indicator("a");
        assert!(red_rule(&[&single], &sdg::compliance_degree(), 1.0).is_err());
        assert!(green_rule(&[&single], &sdg::compliance_degree(), 1.0).is_ok());
        assert!(green_rule(&[], &sdg::compliance_degree(), 1.0).is_err());
    }

    #[test]
    fn test_aggregate_rules_skipped_without_labels() {
        let custom = FuzzyVariable::new(FloatDomain::new("custom", 0.0, 1.0, 100))
            .with_value("low", MembershipFunction::Z { a: 0.2, b: 0.8 })
            .with_value("high", MembershipFunction::S { a: 0.2, b: 0.8 });
        let mut variables = specs(&["a"]);
        variables.insert("custom".to_string(), VariableSpec::input(custom));

        let fis = VariableFis::new(variables).unwrap();
        assert_eq!(fis.rules().len(), 4 + 2);
    }

    #[test]
    fn test_all_green_inputs_predict_green() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();
        let out = fis
            .predict(&record(&[("a", Some(95.0)), ("b", Some(92.0)), ("c", Some(98.0))]))
            .unwrap();
        assert!(out > 80.0, "got {out}");
    }

    #[test]
    fn test_two_red_inputs_fire_red_rule() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();
        let explanation = fis
            .explain(&record(&[("a", Some(5.0)), ("b", Some(8.0)), ("c", Some(95.0))]))
            .unwrap();

        let green = &explanation.rules[12];
        let red = &explanation.rules[13];
        assert!(green.rule.contains("AND c is \"SDG achieved\""));
        assert_eq!(green.firing, 0.0);
        assert_eq!(red.firing, 1.0);
    }

    #[test]
    fn test_single_red_input_fires_neither_aggregate_rule() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();
        let explanation = fis
            .explain(&record(&[("a", Some(5.0)), ("b", Some(95.0)), ("c", Some(95.0))]))
            .unwrap();

        let green = &explanation.rules[12];
        let red = &explanation.rules[13];
        assert!(red.rule.contains("b is \"Major challenges remain\""));
        assert_eq!(red.firing, 0.0);
        assert_eq!(green.firing, 0.0);
        assert!((explanation.compliance_degree - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_one_lagging_input_blocks_green_rule() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();
        let explanation = fis
            .explain(&record(&[("a", Some(95.0)), ("b", Some(95.0)), ("c", Some(60.0))]))
            .unwrap();

        assert!(explanation.rules[12].rule.contains("AND c is \"SDG achieved\""));
        assert_eq!(explanation.rules[12].firing, 0.0);
        assert_eq!(explanation.rules[13].firing, 0.0);
    }

    #[test]
    fn test_mostly_red_inputs_predict_low() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();
        let out = fis
            .predict(&record(&[("a", Some(5.0)), ("b", Some(8.0)), ("c", Some(60.0))]))
            .unwrap();
        assert!(out < 50.0, "got {out}");
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let fis = VariableFis::new(specs(&["a", "b", "c"])).unwrap();

        let with_missing = fis
            .predict(&record(&[("a", Some(95.0)), ("b", None), ("c", Some(f64::NAN))]))
            .unwrap();
        let alone = fis.predict(&record(&[("a", Some(95.0))])).unwrap();
        assert_eq!(with_missing, alone);
    }

    #[test]
    fn test_selection_does_not_shrink_configuration() {
        let fis = VariableFis::new(specs(&["a", "b"])).unwrap();

        fis.predict(&record(&[("a", Some(50.0))])).unwrap();
        assert_eq!(fis.inputs().len(), 2);

        let explanation = fis
            .explain(&record(&[("a", Some(50.0)), ("b", Some(60.0))]))
            .unwrap();
        assert_eq!(explanation.variables, vec!["a", "b"]);
    }

    #[test]
    fn test_no_usable_inputs() {
        let fis = VariableFis::new(specs(&["a"])).unwrap();
        assert!(matches!(
            fis.predict(&record(&[("a", None)])),
            Err(FisError::NoInputs)
        ));
        assert!(matches!(fis.predict(&Record::new()), Err(FisError::NoInputs)));
        assert!(matches!(
            fis.predict(&record(&[("zzz", Some(1.0))])),
            Err(FisError::NoInputs)
        ));
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let fis = VariableFis::new(specs(&["a", "b"])).unwrap();
        let expected = fis
            .predict(&record(&[("a", Some(90.0)), ("b", Some(80.0))]))
            .unwrap();

        let with_extra = fis
            .predict(&record(&[
                ("a", Some(90.0)),
                ("b", Some(80.0)),
                ("city_population", Some(1.5e6)),
            ]))
            .unwrap();
        assert_eq!(with_extra, expected);

        let explanation = fis
            .explain(&record(&[("a", Some(90.0)), ("unused_indicator", None)]))
            .unwrap();
        assert_eq!(explanation.variables, vec!["a"]);
        assert!(explanation.dropped.is_empty());
        assert_eq!(explanation.ignored, vec!["unused_indicator"]);
    }

    #[test]
    fn test_explain_reports_rules() {
        let fis = VariableFis::new(specs(&["a", "b"])).unwrap();
        let explanation = fis
            .explain(&record(&[("a", Some(90.0)), ("b", None)]))
            .unwrap();

        assert_eq!(explanation.variables, vec!["a"]);
        assert_eq!(explanation.dropped, vec!["b"]);
        assert_eq!(explanation.rules.len(), 4);
        let best = explanation
            .rules
            .iter()
            .max_by(|x, y| x.firing.total_cmp(&y.firing))
            .unwrap();
        assert!(best.rule.starts_with("IF a is \"SDG achieved\""));
        assert_eq!(
            explanation.compliance_degree,
            fis.predict(&record(&[("a", Some(90.0))])).unwrap()
        );
    }

    #[test]
    fn test_weight_validation() {
        let mut variables = specs(&["a"]);
        variables["a"].weight = 2.0;
        assert!(matches!(
            VariableFis::new(variables),
            Err(FisError::InvalidWeight(_))
        ));

        let settings = InferenceSettings {
            aggregate_rule_weight: -0.1,
            ..InferenceSettings::default()
        };
        assert!(VariableFis::with_settings(specs(&["a"]), settings).is_err());
    }

    #[test]
    fn test_predict_batch_keeps_order() {
        let fis = VariableFis::new(specs(&["a", "b"])).unwrap();
        let records = vec![
            record(&[("a", Some(95.0)), ("b", Some(95.0))]),
            record(&[("a", None)]),
            record(&[("a", Some(5.0)), ("b", Some(5.0))]),
        ];

        let results = fis.predict_batch(&records);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap() > &75.0);
        assert!(matches!(results[1], Err(FisError::NoInputs)));
        assert!(results[2].as_ref().unwrap() < &25.0);
    }
}
