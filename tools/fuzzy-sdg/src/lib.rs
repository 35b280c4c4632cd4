//! # fuzzy-sdg CLI
//!
//! Command-line interface for evaluating SDG compliance degrees with a fuzzy
//! inference system described in a TOML configuration file.
//!
//! ## Commands
//!
//! - `predict`: evaluate one record given as `name=value` pairs
//! - `batch`: evaluate a JSON array of records
//! - `rules`: print the generated rule base
//! - `validate`: check a configuration file
//!
//! ## Quick Start
//!
//! ```bash
//! # Evaluate a single city (missing values may be written as nan or null)
//! fuzzy-sdg predict -c data/sdg11.toml slum_population=4.2 pm25=11 water_access=null
//!
//! # Show which rules fired
//! fuzzy-sdg predict -c data/sdg11.toml --explain slum_population=4.2 pm25=11
//!
//! # Evaluate a file of records
//! fuzzy-sdg batch -c data/sdg11.toml -i data/sdg11_records.json -o scores.json
//!
//! # Print the rule base for a subset of indicators
//! fuzzy-sdg rules -c data/sdg11.toml --only pm25,water_access
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// fuzzy-sdg CLI application
#[derive(Parser, Debug)]
#[command(name = "fuzzy-sdg")]
#[command(about = "Fuzzy inference of SDG compliance degrees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single record
    Predict {
        /// Configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// Indicator values as name=value (nan, null or empty for missing)
        #[arg(value_parser = parse_assignment, required = true)]
        values: Vec<(String, Option<f64>)>,

        /// Report the selected variables and rule firing strengths
        #[arg(long)]
        explain: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a JSON array of records
    Batch {
        /// Configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// JSON file holding an array of objects (null marks a missing value)
        #[arg(short, long)]
        input: PathBuf,

        /// Write results here instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generated rule base
    Rules {
        /// Configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// Restrict the rule base to these inputs
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },

    /// Check a configuration file
    Validate {
        /// Configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Default log filter for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Parse `name=value`; `nan`, `null` or an empty value mark a missing value
pub fn parse_assignment(s: &str) -> Result<(String, Option<f64>), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{s}'"));
    }

    let value = value.trim();
    let value = match value.to_ascii_lowercase().as_str() {
        "" | "nan" | "null" | "none" => None,
        _ => Some(
            value
                .parse::<f64>()
                .map_err(|e| format!("invalid value for '{name}': {e}"))?,
        ),
    };
    Ok((name.to_string(), value))
}

/// Run the CLI, writing results to `out`
pub fn run<W: std::io::Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::Predict {
            config,
            values,
            explain,
            json,
        } => commands::predict(&config, values, explain, json, out),
        Commands::Batch {
            config,
            input,
            output,
        } => commands::batch(&config, &input, output.as_deref(), out),
        Commands::Rules { config, only } => commands::rules(&config, &only, out),
        Commands::Validate { config } => commands::validate(&config, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("pm25=12.5").unwrap(),
            ("pm25".to_string(), Some(12.5))
        );
        assert_eq!(
            parse_assignment(" water = NaN ").unwrap(),
            ("water".to_string(), None)
        );
        assert_eq!(parse_assignment("x=").unwrap(), ("x".to_string(), None));
        assert!(parse_assignment("pm25").is_err());
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("pm25=high").is_err());
    }

    #[test]
    fn test_parse_predict_command() {
        let cli = Cli::parse_from([
            "fuzzy-sdg",
            "-v",
            "predict",
            "-c",
            "sdg11.toml",
            "a=1",
            "b=null",
            "--explain",
        ]);
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Predict {
                values, explain, ..
            } => {
                assert!(explain);
                assert_eq!(values.len(), 2);
                assert_eq!(values[1], ("b".to_string(), None));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rules_only_is_comma_separated() {
        let cli = Cli::parse_from(["fuzzy-sdg", "rules", "-c", "x.toml", "--only", "a,b"]);
        match cli.command {
            Commands::Rules { only, .. } => assert_eq!(only, vec!["a", "b"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
