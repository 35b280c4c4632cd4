//! Error types for the fuzzy inference engine

use thiserror::Error;

/// Fuzzy inference error type
#[derive(Error, Debug)]
pub enum FisError {
    /// Invalid membership function parameters
    #[error("Invalid membership function: {0}")]
    InvalidMembership(String),

    /// Invalid domain bounds or resolution
    #[error("Invalid domain '{name}': {reason}")]
    InvalidDomain {
        /// Domain name
        name: String,
        /// Why the domain was rejected
        reason: String,
    },

    /// Variable referenced but not defined
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Linguistic label not defined on a variable
    #[error("Variable '{variable}' has no fuzzy value '{label}'")]
    UnknownLabel {
        /// Variable name
        variable: String,
        /// Missing label
        label: String,
    },

    /// A rule was rejected
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Rule weight outside [0, 1]
    #[error("Invalid rule weight {0}: must be a finite value in [0, 1]")]
    InvalidWeight(f64),

    /// Variable set does not form a valid system
    #[error("Invalid variable set: {0}")]
    InvalidVariables(String),

    /// A crisp value required by the rules was not supplied
    #[error("Missing crisp input for variable '{0}'")]
    MissingInput(String),

    /// No usable crisp inputs were left after dropping missing values
    #[error("No usable inputs: every value was missing or NaN")]
    NoInputs,

    /// Aggregated output set is empty, nothing to defuzzify
    #[error("Cannot defuzzify: aggregated output membership is zero everywhere")]
    EmptyOutput,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for fuzzy inference operations
pub type Result<T> = std::result::Result<T, FisError>;
