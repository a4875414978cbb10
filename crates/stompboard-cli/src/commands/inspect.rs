//! Inspect command implementation
//!
//! Loads a generated model, validates it, and shows how each component maps
//! onto renderer geometry.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use stompboard_spec::{canonical_model_hash, validate_model, GeometryParams, PedalModel};

use super::json_output::{
    record_error_to_json, validation_error_to_json, validation_warning_to_json,
    InspectComponent, InspectOutput,
};
use super::validate::print_validation_results;
use crate::input::load_model;

/// Run the inspect command
///
/// # Arguments
/// * `model_path` - Path to a model description
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the model is valid, 1 otherwise
pub fn run(model_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(model_path)
    } else {
        run_human(model_path)
    }
}

fn run_human(model_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), model_path);

    let model = load_model(Path::new(model_path))
        .with_context(|| format!("Failed to load model: {}", model_path))?;

    let hash = canonical_model_hash(&model).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {} ({})", "Model:".dimmed(), model.name, model.slug);
    println!("{} {}", "Model hash:".dimmed(), hash);
    println!(
        "{} {:.2} x {:.2} x {:.2} mm, {}",
        "Body:".dimmed(),
        model.dimensions.width,
        model.dimensions.height,
        model.dimensions.depth,
        model.material.color()
    );
    println!();

    for component in &model.components {
        println!(
            "  {:<12} {:<9} at ({:.2}, {:.2}, {:.2})  {}",
            component.name,
            component.kind.as_str(),
            component.position.x,
            component.position.y,
            component.position.z,
            describe(&component.geometry()).dimmed()
        );
    }
    println!();

    let result = validate_model(&model);
    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "{} {} components",
            "SUCCESS".green().bold(),
            model.components.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Model has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(model_path: &str) -> Result<ExitCode> {
    let output = match load_model(Path::new(model_path)) {
        Ok(model) => inspect_output(&model),
        Err(e) => InspectOutput::load_failure(record_error_to_json(&e)),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn inspect_output(model: &PedalModel) -> InspectOutput {
    let result = validate_model(model);
    InspectOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(validation_error_to_json).collect(),
        warnings: result
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        slug: Some(model.slug.clone()),
        model_hash: canonical_model_hash(model).ok(),
        components: model
            .components
            .iter()
            .map(|c| InspectComponent {
                name: c.name.clone(),
                geometry: c.geometry(),
            })
            .collect(),
    }
}

fn describe(params: &GeometryParams) -> String {
    match params {
        GeometryParams::Box {
            width,
            height,
            depth,
        } => format!("box {:.2}x{:.2}x{:.2}", width, height, depth),
        GeometryParams::Cylinder {
            radius_top,
            height,
            radial_segments,
            ..
        } => format!(
            "cylinder r={:.2} h={:.2} segments={}",
            radius_top, height, radial_segments
        ),
        GeometryParams::Plane { width, depth } => format!("plane {:.2}x{:.2}", width, depth),
    }
}
