//! TOML configuration
//!
//! A configuration file lists the indicator inputs, optionally overrides the
//! compliance degree output, and selects the inference operators:
//!
//! ```toml
//! [inference]
//! defuzzification = "centroid"
//! aggregate_rule_weight = 1.0
//!
//! [inputs.housing]
//! preset = "sdg"
//!
//! [inputs.pollution]
//! weight = 0.8
//! reverse = true
//! min = 0.0
//! max = 100.0
//! sets = [
//!     { label = "low", shape = "z", a = 20.0, b = 60.0 },
//!     { label = "high", shape = "s", a = 40.0, b = 80.0 },
//! ]
//! ```

use crate::domain::{FloatDomain, DEFAULT_STEPS};
use crate::error::{FisError, Result};
use crate::membership::FuzzySet;
use crate::sdg;
use crate::variable::FuzzyVariable;
use crate::variable_fis::{InferenceSettings, VariableFis, VariableSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Built-in families of linguistic values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// The four SDG dashboard bands over a 0-100 score
    Sdg,
}

/// Domain and linguistic values of one variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig {
    /// Built-in linguistic values, exclusive with `sets`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    /// Lower domain bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper domain bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Number of domain samples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    /// Linguistic values in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sets: Vec<FuzzySet>,
}

impl VariableConfig {
    /// Build the linguistic variable called `name`
    pub fn to_variable(&self, name: &str) -> Result<FuzzyVariable> {
        let steps = self.steps.unwrap_or(DEFAULT_STEPS);

        let variable = match (self.preset, self.sets.is_empty()) {
            (Some(_), false) => {
                return Err(FisError::Config(format!(
                    "variable '{name}' sets both a preset and explicit sets"
                )))
            }
            (Some(Preset::Sdg), true) => sdg::banded(FloatDomain::new(
                name,
                self.min.unwrap_or(0.0),
                self.max.unwrap_or(100.0),
                steps,
            )),
            (None, false) => {
                let (min, max) = self.min.zip(self.max).ok_or_else(|| {
                    FisError::Config(format!("variable '{name}' needs both min and max"))
                })?;
                FuzzyVariable::from_sets(
                    FloatDomain::new(name, min, max, steps),
                    self.sets.iter().cloned(),
                )
            }
            (None, true) => {
                return Err(FisError::Config(format!(
                    "variable '{name}' defines neither a preset nor sets"
                )))
            }
        };

        if variable.len() != self.sets.len() && self.preset.is_none() {
            return Err(FisError::Config(format!(
                "variable '{name}' repeats a set label"
            )));
        }
        variable.validate()?;
        Ok(variable)
    }
}

/// One indicator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Weight of the automatic rules
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Map values onto the output in reverse order
    #[serde(default)]
    pub reverse: bool,
    /// Domain and linguistic values
    #[serde(flatten)]
    pub variable: VariableConfig,
}

fn default_weight() -> f64 {
    1.0
}

/// The compliance degree output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output variable name
    #[serde(default = "default_output_name")]
    pub name: String,
    /// Domain and linguistic values
    #[serde(flatten)]
    pub variable: VariableConfig,
}

fn default_output_name() -> String {
    sdg::COMPLIANCE_DEGREE.to_string()
}

/// Complete system configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FisConfig {
    /// Inference operators
    #[serde(default)]
    pub inference: InferenceSettings,
    /// Output variable, the SDG compliance degree when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
    /// Indicator inputs in rule generation order
    #[serde(default)]
    pub inputs: IndexMap<String, InputConfig>,
}

impl FisConfig {
    /// Load a configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FisError::Config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            FisError::Config(format!("Invalid config file '{}': {e}", path.display()))
        })?;
        info!(
            "Loaded configuration from {} ({} inputs)",
            path.display(),
            config.inputs.len()
        );
        Ok(config)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FisError::Config(e.to_string()))
    }

    /// Variable specifications, output last
    pub fn to_specs(&self) -> Result<IndexMap<String, VariableSpec>> {
        let mut specs = IndexMap::with_capacity(self.inputs.len() + 1);

        for (name, input) in &self.inputs {
            let variable = input.variable.to_variable(name)?;
            specs.insert(
                name.clone(),
                VariableSpec::input(variable)
                    .with_weight(input.weight)
                    .with_reverse(input.reverse),
            );
        }

        let output = match &self.output {
            Some(output) => output.variable.to_variable(&output.name)?,
            None => sdg::compliance_degree(),
        };
        if specs.contains_key(output.name()) {
            return Err(FisError::Config(format!(
                "output '{}' clashes with an input of the same name",
                output.name()
            )));
        }
        specs.insert(output.name().to_string(), VariableSpec::output(output));

        debug!("Configuration yields {} variables", specs.len());
        Ok(specs)
    }

    /// Check that the configuration builds a working system
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build the inference system
    pub fn build(&self) -> Result<VariableFis> {
        VariableFis::with_settings(self.to_specs()?, self.inference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defuzz::DefuzzificationMethod;
    use crate::membership::MembershipFunction;
    use crate::sdg::SDG_ACHIEVED;
    use std::io::Write;

    const SAMPLE: &str = r#"
[inference]
defuzzification = "mean_of_maximum"
aggregate_rule_weight = 0.9

[inputs.housing]
preset = "sdg"

[inputs.pollution]
weight = 0.5
reverse = true
min = 0
max = 200
steps = 201
sets = [
    { label = "low", shape = "z", a = 40.0, b = 120.0 },
    { label = "high", shape = "s", a = 80.0, b = 160.0 },
]
"#;

    #[test]
    fn test_parse_sample() {
        let config = FisConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(
            config.inference.defuzzification,
            DefuzzificationMethod::MeanOfMaximum
        );
        assert_eq!(config.inference.aggregate_rule_weight, 0.9);
        assert_eq!(config.inputs.keys().collect::<Vec<_>>(), vec!["housing", "pollution"]);

        let pollution = &config.inputs["pollution"];
        assert_eq!(pollution.weight, 0.5);
        assert!(pollution.reverse);
        assert_eq!(pollution.variable.sets[1].function, MembershipFunction::S { a: 80.0, b: 160.0 });
    }

    #[test]
    fn test_specs_from_sample() {
        let specs = FisConfig::from_toml_str(SAMPLE).unwrap().to_specs().unwrap();

        assert_eq!(specs.len(), 3);
        assert!(specs["housing"].fuzzy_variable.has_label(SDG_ACHIEVED));
        assert_eq!(specs["pollution"].fuzzy_variable.domain.max, 200.0);
        assert_eq!(specs.keys().last().map(String::as_str), Some(sdg::COMPLIANCE_DEGREE));
    }

    #[test]
    fn test_build_and_predict() {
        let fis = FisConfig::from_toml_str(SAMPLE).unwrap().build().unwrap();
        assert_eq!(fis.inputs().len(), 2);
        assert_eq!(fis.settings().aggregate_rule_weight, 0.9);
    }

    #[test]
    fn test_defaults() {
        let config = FisConfig::from_toml_str("[inputs.a]\npreset = \"sdg\"\n").unwrap();
        assert_eq!(config.inference, InferenceSettings::default());
        assert_eq!(config.inputs["a"].weight, 1.0);
        assert!(!config.inputs["a"].reverse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_variables() {
        let both = "[inputs.a]\npreset = \"sdg\"\nmin = 0\nmax = 1\nsets = [{ label = \"x\", shape = \"singleton\", value = 0.5 }]\n";
        assert!(matches!(
            FisConfig::from_toml_str(both).unwrap().to_specs(),
            Err(FisError::Config(_))
        ));

        let neither = "[inputs.a]\nweight = 1.0\n";
        assert!(FisConfig::from_toml_str(neither).unwrap().to_specs().is_err());

        let no_bounds = "[inputs.a]\nsets = [{ label = \"x\", shape = \"singleton\", value = 0.5 }]\n";
        assert!(FisConfig::from_toml_str(no_bounds).unwrap().to_specs().is_err());

        let no_inputs = FisConfig::default();
        assert!(matches!(no_inputs.validate(), Err(FisError::InvalidVariables(_))));
    }

    #[test]
    fn test_output_override() {
        let text = r#"
[output]
name = "score"
min = 0.0
max = 10.0
sets = [
    { label = "SDG achieved", shape = "s", a = 6.0, b = 9.0 },
    { label = "Major challenges remain", shape = "z", a = 1.0, b = 4.0 },
]

[inputs.a]
preset = "sdg"
"#;
        let config = FisConfig::from_toml_str(text).unwrap();
        let fis = config.build().unwrap();
        assert_eq!(fis.output().name(), "score");
        assert_eq!(fis.output().len(), 2);
    }

    #[test]
    fn test_round_trip_through_file() {
        let config = FisConfig::from_toml_str(SAMPLE).unwrap();
        let rendered = config.to_toml_string().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(rendered.as_bytes()).unwrap();

        let loaded = FisConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = FisConfig::from_path("/nonexistent/fuzzy-sdg.toml").unwrap_err();
        assert!(matches!(err, FisError::Config(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
