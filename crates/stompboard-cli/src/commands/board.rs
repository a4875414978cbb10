//! Board command implementation
//!
//! Lays generated pedals out in a single row for a pedalboard scene.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use stompboard_spec::{layout_board, PedalBoard};

use crate::config::GeneratorConfig;
use crate::input::{list_records, model_path};

/// Resolves the slugs to place on the board.
///
/// With no explicit slugs every model in `models_dir` is used, in file name
/// order. Returns the slugs and the ones with no model file.
pub fn collect_slugs(
    models_dir: &Path,
    slugs: &[String],
) -> std::io::Result<(Vec<String>, Vec<String>)> {
    if slugs.is_empty() {
        let all = list_records(models_dir)?
            .iter()
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        return Ok((all, Vec::new()));
    }

    let missing = slugs
        .iter()
        .filter(|slug| !model_path(models_dir, slug).is_file())
        .cloned()
        .collect();
    Ok((slugs.to_vec(), missing))
}

/// Builds the board layout for the given slugs.
pub fn build_board(models_dir: &Path, slugs: &[String], spacing: f64) -> Result<PedalBoard> {
    if !spacing.is_finite() || spacing <= 0.0 {
        anyhow::bail!("Spacing must be a positive number, got {}", spacing);
    }

    let (slugs, missing) = collect_slugs(models_dir, slugs).with_context(|| {
        format!("Failed to read models directory: {}", models_dir.display())
    })?;
    if !missing.is_empty() {
        anyhow::bail!(
            "No model for: {} (run generate-all first)",
            missing.join(", ")
        );
    }
    if slugs.is_empty() {
        anyhow::bail!("No models found in {}", models_dir.display());
    }

    Ok(layout_board(slugs, spacing))
}

/// Run the board command
///
/// # Arguments
/// * `slugs` - Pedals to place, left to right (default: every model)
/// * `models_dir` - Directory holding generated models
/// * `spacing` - Center-to-center distance in mm
/// * `output` - Output file (default: stdout)
pub fn run(
    slugs: &[String],
    models_dir: Option<&str>,
    spacing: f64,
    output: Option<&str>,
) -> Result<ExitCode> {
    let config = GeneratorConfig::resolve(None, models_dir);
    let board = build_board(&config.models_dir, slugs, spacing)?;
    let json = serde_json::to_string_pretty(&board).context("Failed to serialize board")?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write board: {}", path))?;
            println!(
                "{} Placed {} pedals in {}",
                "SUCCESS".green().bold(),
                board.slots.len(),
                path
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
