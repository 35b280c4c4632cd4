//! # fuzzy-sdg-fis - Fuzzy Inference for SDG Compliance
//!
//! Maps a set of sustainability indicator scores to a single *compliance
//! degree* between 0 and 100 using a Mamdani fuzzy inference system.
//!
//! ## Overview
//!
//! Each indicator is a linguistic variable whose values follow the SDG
//! dashboard bands ("SDG achieved", "Challenges remain", "Significant
//! challenges remain", "Major challenges remain"). The rule base is generated
//! rather than written by hand:
//!
//! - one **automatic** rule block per indicator, relating its bands to the
//!   output bands (optionally reversed and weighted),
//! - a **green** rule: all indicators achieved ⇒ SDG achieved,
//! - a **red** rule: any two indicators with major challenges ⇒ major
//!   challenges remain.
//!
//! Records with missing indicators are evaluated on the indicators they do
//! have: the rule base is regenerated for that subset before inference.
//!
//! ## Modules
//!
//! - [`membership`]: membership functions and fuzzy sets
//! - [`domain`], [`variable`]: discretised domains and linguistic variables
//! - [`norms`], [`proposition`], [`rule`]: rule antecedents and rule sets
//! - [`fis`], [`defuzz`]: Mamdani inference and defuzzification
//! - [`sdg`]: dashboard band presets
//! - [`variable_fis`]: per-record variable selection and rule generation
//! - [`config`]: TOML configuration
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sdg_fis::{FisConfig, Record};
//!
//! let config = FisConfig::from_toml_str(
//!     r#"
//!     [inputs.housing]
//!     preset = "sdg"
//!
//!     [inputs.transport]
//!     preset = "sdg"
//!
//!     [inputs.air_quality]
//!     preset = "sdg"
//!     "#,
//! )?;
//! let fis = config.build()?;
//!
//! let record = Record::from([
//!     ("housing".to_string(), Some(10.0)),
//!     ("transport".to_string(), Some(12.0)),
//!     ("air_quality".to_string(), Some(f64::NAN)),
//! ]);
//! let degree = fis.predict(&record)?;
//! assert!(degree < 25.0);
//! # Ok::<(), fuzzy_sdg_fis::FisError>(())
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod defuzz;
pub mod domain;
pub mod error;
pub mod fis;
pub mod membership;
pub mod norms;
pub mod proposition;
pub mod rule;
pub mod sdg;
pub mod variable;
pub mod variable_fis;

// Re-exports for convenience
pub use config::FisConfig;
pub use defuzz::DefuzzificationMethod;
pub use domain::FloatDomain;
pub use error::{FisError, Result};
pub use fis::{FuzzyInferenceSystem, Inference};
pub use membership::{FuzzySet, MembershipFunction};
pub use norms::{TConorm, TNorm};
pub use proposition::Proposition;
pub use rule::{FuzzyRule, FuzzyRuleSet};
pub use variable::FuzzyVariable;
pub use variable_fis::{
    Explanation, InferenceSettings, Record, VariableFis, VariableKind, VariableSpec,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
