//! Validate command implementation
//!
//! Checks a pedal record without generating anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use stompboard_spec::{canonical_record_hash, validate_pedal_spec, ValidationResult};

use super::json_output::{
    record_error_to_json, validation_error_to_json, validation_warning_to_json, ValidateOutput,
};
use crate::input::load_pedal_spec;

/// Run the validate command
///
/// # Arguments
/// * `record_path` - Path to the pedal record
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(record_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(record_path)
    } else {
        run_human(record_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(record_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), record_path);

    let spec = load_pedal_spec(Path::new(record_path))
        .with_context(|| format!("Failed to load pedal record: {}", record_path))?;

    let hash = canonical_record_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Slug:".dimmed(), spec.slug);
    println!("{} {}", "Record hash:".dimmed(), hash);

    let result = validate_pedal_spec(&spec);
    let duration_ms = start.elapsed().as_millis();

    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Record is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Record has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(record_path: &str) -> Result<ExitCode> {
    let output = match load_pedal_spec(Path::new(record_path)) {
        Ok(spec) => {
            let result = validate_pedal_spec(&spec);
            ValidateOutput {
                success: result.is_ok(),
                errors: result.errors.iter().map(validation_error_to_json).collect(),
                warnings: result
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect(),
                spec_hash: canonical_record_hash(&spec).ok(),
                slug: Some(spec.slug),
            }
        }
        Err(e) => ValidateOutput::load_failure(record_error_to_json(&e)),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Prints errors and warnings with their codes and paths.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}
