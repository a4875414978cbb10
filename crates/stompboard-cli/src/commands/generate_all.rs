//! Generate-all command implementation
//!
//! Generates a model description for every pedal record in a directory.
//! A record that fails is reported and skipped; the rest still generate.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use stompboard_spec::{
    canonical_model_hash, canonical_record_hash, generate_pedal_model, PedalModel, PedalSpec,
};

use crate::config::GeneratorConfig;
use crate::input::{list_records, load_pedal_spec, write_model, RecordError};

/// Result of generating a single record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResult {
    /// Path to the record file
    pub record_path: String,
    /// Pedal slug (file stem until the record parses)
    pub slug: String,
    /// Whether generation succeeded
    pub success: bool,
    /// Error code if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// BLAKE3 hash of the canonical record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// BLAKE3 hash of the canonical model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_hash: Option<String>,
    /// Path of the written model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

/// Summary report for a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Total records processed
    pub total_records: usize,
    /// Successful generations
    pub successful: usize,
    /// Failed generations
    pub failed: usize,
    /// Total runtime in seconds
    pub runtime_seconds: f64,
    /// Slugs written by more than one record; the last record wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_slugs: Vec<String>,
    /// Results for each record, in processing order
    pub records: Vec<RecordResult>,
}

impl GenerationSummary {
    /// Whether every record generated.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Results of the records that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RecordResult> {
        self.records.iter().filter(|r| !r.success)
    }
}

/// A record turned into a model, before anything is written.
#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    pub spec: PedalSpec,
    pub model: PedalModel,
}

/// Loads a record and assembles its model.
pub fn model_from_record(record_path: &Path) -> Result<GeneratedRecord, RecordError> {
    let spec = load_pedal_spec(record_path)?;
    let model = generate_pedal_model(&spec).map_err(|source| RecordError::Model {
        path: record_path.to_path_buf(),
        source,
    })?;
    Ok(GeneratedRecord { spec, model })
}

/// Process a single record file
///
/// Never fails: any error is captured in the returned result.
pub fn process_record(record_path: &Path, models_dir: &Path) -> RecordResult {
    let start = Instant::now();

    let mut result = RecordResult {
        record_path: record_path.to_string_lossy().to_string(),
        slug: record_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        success: false,
        error_code: None,
        error: None,
        spec_hash: None,
        model_hash: None,
        output_path: None,
        duration_ms: 0,
    };

    match generate_record(record_path, models_dir, &mut result) {
        Ok(output_path) => {
            result.success = true;
            result.output_path = Some(output_path.to_string_lossy().to_string());
        }
        Err(e) => {
            result.error_code = Some(e.code().to_string());
            result.error = Some(e.to_string());
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

fn generate_record(
    record_path: &Path,
    models_dir: &Path,
    result: &mut RecordResult,
) -> Result<PathBuf, RecordError> {
    let spec = load_pedal_spec(record_path)?;
    result.slug = spec.slug.clone();
    result.spec_hash = canonical_record_hash(&spec).ok();

    let model = generate_pedal_model(&spec).map_err(|source| RecordError::Model {
        path: record_path.to_path_buf(),
        source,
    })?;
    result.model_hash = canonical_model_hash(&model).ok();

    write_model(models_dir, &model, record_path)
}

/// Generates models for every record in `pedals_dir`.
///
/// Fails only when the directories themselves are unusable.
pub fn process_directory(pedals_dir: &Path, models_dir: &Path) -> Result<GenerationSummary> {
    process_directory_with(pedals_dir, models_dir, |_| {})
}

/// Like [`process_directory`], calling `on_record` after each record.
pub fn process_directory_with<F>(
    pedals_dir: &Path,
    models_dir: &Path,
    mut on_record: F,
) -> Result<GenerationSummary>
where
    F: FnMut(&RecordResult),
{
    let start = Instant::now();

    if !pedals_dir.is_dir() {
        anyhow::bail!("Pedals directory does not exist: {}", pedals_dir.display());
    }
    fs::create_dir_all(models_dir).with_context(|| {
        format!(
            "Failed to create models directory: {}",
            models_dir.display()
        )
    })?;

    let record_files = list_records(pedals_dir).with_context(|| {
        format!(
            "Failed to read pedals directory: {}",
            pedals_dir.display()
        )
    })?;
    let mut records = Vec::with_capacity(record_files.len());
    let mut writers: BTreeMap<String, usize> = BTreeMap::new();

    for record_file in &record_files {
        let result = process_record(record_file, models_dir);
        if result.success {
            *writers.entry(result.slug.clone()).or_default() += 1;
        }
        on_record(&result);
        records.push(result);
    }

    let successful = records.iter().filter(|r| r.success).count();
    Ok(GenerationSummary {
        total_records: records.len(),
        successful,
        failed: records.len() - successful,
        runtime_seconds: start.elapsed().as_secs_f64(),
        duplicate_slugs: writers
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(slug, _)| slug)
            .collect(),
        records,
    })
}

/// Run the generate-all command
///
/// # Arguments
/// * `pedals_dir` - Directory containing pedal records (flag, then env, then ./pedals)
/// * `models_dir` - Output directory for models (flag, then env, then ./src/models/pedals)
/// * `summary_path` - Optional path for the JSON summary report
/// * `verbose` - Whether to print one line per record
///
/// # Returns
/// Exit code: 0 success, 1 if any record failed
pub fn run(
    pedals_dir: Option<&str>,
    models_dir: Option<&str>,
    summary_path: Option<&str>,
    verbose: bool,
) -> Result<ExitCode> {
    let config = GeneratorConfig::resolve(pedals_dir, models_dir);

    println!("{}", "======================================".cyan());
    println!("{}", "  Stompboard Pedal Model Generator".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!(
        "{} {}",
        "Pedals directory:".blue().bold(),
        config.pedals_dir.display()
    );
    println!(
        "{} {}",
        "Models directory:".blue().bold(),
        config.models_dir.display()
    );
    println!();

    let summary = process_directory_with(&config.pedals_dir, &config.models_dir, |result| {
        print_progress(result, verbose)
    })?;

    if !verbose {
        println!(); // Newline after progress dots
    }

    print_summary(&summary);

    if let Some(path) = summary_path {
        let summary_json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        fs::write(path, summary_json)
            .with_context(|| format!("Failed to write summary: {}", path))?;
        println!("{} {}", "Summary report:".blue().bold(), path);
    }

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_progress(result: &RecordResult, verbose: bool) {
    if result.success {
        if verbose {
            println!(
                "  {} {} ({}ms)",
                "SUCCESS".green(),
                result.slug,
                result.duration_ms
            );
        } else {
            print!("{}", ".".green());
        }
    } else if verbose {
        println!(
            "  {} {} - {}",
            "FAILED".red(),
            result.slug,
            result.error.as_deref().unwrap_or("unknown error")
        );
    } else {
        print!("{}", "x".red());
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!();
    println!("{}", "======================================".cyan());
    println!("{}", "  Generation Summary".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!(
        "{} {}",
        "Total records processed:".blue().bold(),
        summary.total_records
    );
    println!("{} {}", "Successful:".green().bold(), summary.successful);
    println!("{} {}", "Failed:".red().bold(), summary.failed);
    println!(
        "{} {:.2}s",
        "Total runtime:".blue().bold(),
        summary.runtime_seconds
    );
    println!();

    for slug in &summary.duplicate_slugs {
        println!(
            "{} slug '{}' was generated by more than one record; the last one was kept",
            "WARN".yellow().bold(),
            slug
        );
    }

    let _ = write_failures(&mut std::io::stderr().lock(), summary);
}

/// Writes the failed records, one line each, to `out`.
fn write_failures<W: Write>(out: &mut W, summary: &GenerationSummary) -> std::io::Result<()> {
    let mut failed = summary.failures().peekable();
    if failed.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "{}", "Failed records:".red().bold())?;
    for result in failed {
        writeln!(
            out,
            "  - {} [{}]: {}",
            result.record_path,
            result.error_code.as_deref().unwrap_or("?"),
            result.error.as_deref().unwrap_or("unknown error")
        )?;
    }
    writeln!(out)
}
