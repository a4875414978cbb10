//! Generate command implementation
//!
//! Generates the model description for a single pedal record.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use stompboard_spec::canonical_model_hash;

use super::generate_all::model_from_record;
use crate::config::GeneratorConfig;
use crate::input::write_model;

/// Run the generate command
///
/// # Arguments
/// * `record_path` - Path to the pedal record
/// * `models_dir` - Output directory (flag, then env, then default)
/// * `to_stdout` - Print the model instead of writing it
///
/// # Returns
/// Exit code: 0 success, 1 if the record could not be generated
pub fn run(record_path: &str, models_dir: Option<&str>, to_stdout: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let path = Path::new(record_path);

    let generated = match model_from_record(path) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(1));
        }
    };

    if to_stdout {
        let json = generated
            .model
            .to_json_pretty()
            .context("Failed to serialize model")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    let config = GeneratorConfig::resolve(None, models_dir);
    fs::create_dir_all(&config.models_dir).with_context(|| {
        format!(
            "Failed to create models directory: {}",
            config.models_dir.display()
        )
    })?;

    println!("{} {}", "Generating:".cyan().bold(), record_path);
    let out_path = match write_model(&config.models_dir, &generated.model, path) {
        Ok(out_path) => out_path,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(1));
        }
    };

    let hash = canonical_model_hash(&generated.model).unwrap_or_else(|_| "unknown".to_string());
    println!(
        "  {} {} ({} components)",
        "->".dimmed(),
        out_path.display(),
        generated.model.components.len()
    );
    println!("  {} {}", "Model hash:".dimmed(), hash);
    println!(
        "\n{} Generated {} ({}ms)",
        "SUCCESS".green().bold(),
        generated.model.slug,
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}
