//! Command implementations

use anyhow::{bail, Context, Result};
use fuzzy_sdg_fis::{FisConfig, Record, VariableFis};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Outcome of one record in a batch
#[derive(Debug, Serialize)]
pub struct BatchResult {
    /// Position of the record in the input array
    pub index: usize,
    /// Predicted compliance degree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_degree: Option<f64>,
    /// Why the record could not be evaluated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn load(config: &Path) -> Result<VariableFis> {
    let config = FisConfig::from_path(config)?;
    config
        .build()
        .context("Failed to build the inference system")
}

/// Evaluate one record
pub fn predict<W: Write>(
    config: &Path,
    values: Vec<(String, Option<f64>)>,
    explain: bool,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let fis = load(config)?;

    let mut record = Record::with_capacity(values.len());
    for (name, value) in values {
        if record.insert(name.clone(), value).is_some() {
            bail!("Variable '{name}' given more than once");
        }
    }

    if !explain {
        let degree = fis.predict(&record)?;
        if json {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "compliance_degree": degree }))?;
            writeln!(out)?;
        } else {
            writeln!(out, "compliance_degree = {degree:.2}")?;
        }
        return Ok(());
    }

    let explanation = fis.explain(&record)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &explanation)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "compliance_degree = {:.2}", explanation.compliance_degree)?;
    writeln!(out, "variables: {}", explanation.variables.join(", "))?;
    if !explanation.dropped.is_empty() {
        writeln!(out, "dropped: {}", explanation.dropped.join(", "))?;
    }
    if !explanation.ignored.is_empty() {
        writeln!(out, "ignored: {}", explanation.ignored.join(", "))?;
    }
    writeln!(out, "rules:")?;
    for activation in &explanation.rules {
        writeln!(out, "  {:.3}  {}", activation.firing, activation.rule)?;
    }
    Ok(())
}

/// Evaluate a JSON array of records
pub fn batch<W: Write>(config: &Path, input: &Path, output: Option<&Path>, out: &mut W) -> Result<()> {
    let fis = load(config)?;

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read records from '{}'", input.display()))?;
    let records: Vec<Record> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse records in '{}'", input.display()))?;
    info!("Evaluating {} records", records.len());

    let results: Vec<BatchResult> = fis
        .predict_batch(&records)
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(degree) => BatchResult {
                index,
                compliance_degree: Some(degree),
                error: None,
            },
            Err(e) => {
                warn!("Record {} could not be evaluated: {}", index, e);
                BatchResult {
                    index,
                    compliance_degree: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            write_json(file, &results)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            writeln!(
                out,
                "Wrote {} results to {} ({} failed)",
                results.len(),
                path.display(),
                failed
            )?;
        }
        None => {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Pretty-print `value` through a buffer, surfacing errors from the final flush
fn write_json<W: Write, T: Serialize>(sink: W, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(sink);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Print the rule base, optionally for a subset of inputs
pub fn rules<W: Write>(config: &Path, only: &[String], out: &mut W) -> Result<()> {
    let fis = load(config)?;

    let rules = if only.is_empty() {
        fis.rules().clone()
    } else {
        let selection: Vec<&str> = only.iter().map(String::as_str).collect();
        fis.generate_rules(&selection)?
    };

    write!(out, "{rules}")?;
    Ok(())
}

/// Check a configuration and summarise it
pub fn validate<W: Write>(config: &Path, out: &mut W) -> Result<()> {
    let fis = load(config)?;

    writeln!(out, "Configuration OK: {}", config.display())?;
    writeln!(
        out,
        "output: {} [{}, {}] ({})",
        fis.output().name(),
        fis.output().domain.min,
        fis.output().domain.max,
        fis.output().labels().collect::<Vec<_>>().join(", ")
    )?;
    for (name, spec) in fis.inputs() {
        writeln!(
            out,
            "input: {} [{}, {}] weight={} reverse={}",
            name,
            spec.fuzzy_variable.domain.min,
            spec.fuzzy_variable.domain.max,
            spec.weight,
            spec.reverse
        )?;
    }
    writeln!(out, "rules: {}", fis.rules().len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Sink that accepts nothing
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_json_reports_failed_flush() {
        let results = vec![BatchResult {
            index: 0,
            compliance_degree: Some(42.0),
            error: None,
        }];

        let err = write_json(FullDisk, &results).unwrap_err();
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_write_json_writes_everything() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &serde_json::json!({ "index": 3 })).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["index"], 3);
    }
}
