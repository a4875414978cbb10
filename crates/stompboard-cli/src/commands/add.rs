//! Add command implementation
//!
//! Creates a pedal record from command-line flags.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use stompboard_spec::{validate_pedal_spec, PedalSpec, PedalType};

use super::validate::print_validation_results;
use crate::config::GeneratorConfig;
use crate::input::{model_path, write_pedal_spec};

/// Bypass description used when none is given.
pub const DEFAULT_BYPASS: &str = "True Bypass";

/// Fields of a new pedal record.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub name: String,
    pub manufacturer: String,
    pub pedal_type: Option<String>,
    /// Comma-separated control labels.
    pub controls: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub milli_amps: Option<f64>,
    pub voltage: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub bypass: Option<String>,
    pub year: Option<u32>,
    pub pedals_dir: Option<String>,
    /// Replace an existing record with the same slug.
    pub force: bool,
}

/// Splits a comma-separated control list, trimming labels and dropping
/// empty ones.
pub fn parse_controls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the record described by `options`.
///
/// The pedal type is normalized to a known category name when it matches one
/// case-insensitively and kept verbatim otherwise.
pub fn build_record(options: &AddOptions) -> PedalSpec {
    let pedal_type = options
        .pedal_type
        .as_deref()
        .map(|t| match PedalType::parse(t) {
            Some(known) => known.as_str().to_string(),
            None => t.trim().to_string(),
        })
        .unwrap_or_else(|| PedalType::Other.as_str().to_string());

    let mut builder = PedalSpec::builder(options.manufacturer.trim(), options.name.trim())
        .pedal_type(pedal_type)
        .controls(options.controls.as_deref().map(parse_controls).unwrap_or_default())
        .bypass(options.bypass.as_deref().unwrap_or(DEFAULT_BYPASS));

    if let Some(dimensions) = &options.dimensions {
        builder = builder.dimensions(dimensions.trim());
    }
    if let Some(weight) = &options.weight {
        builder = builder.weight(weight.trim());
    }
    if let Some(milli_amps) = options.milli_amps {
        builder = builder.milli_amps(milli_amps);
    }
    if let Some(voltage) = options.voltage {
        builder = builder.voltage(voltage);
    }
    if let Some(price) = options.price {
        builder = builder.price(price);
    }
    if let Some(description) = &options.description {
        builder = builder.description(description.trim());
    }
    if let Some(url) = &options.image_url {
        builder = builder.image_url(url.trim());
    }
    if let Some(year) = options.year {
        builder = builder.year(year);
    }

    builder.build()
}

/// Run the add command
///
/// # Returns
/// Exit code: 0 if the record was written, 1 if it failed validation
pub fn run(options: &AddOptions) -> Result<ExitCode> {
    let config = GeneratorConfig::resolve(options.pedals_dir.as_deref(), None);
    let spec = build_record(options);

    println!(
        "{} {} {}",
        "Adding:".cyan().bold(),
        spec.manufacturer,
        spec.name
    );

    let result = validate_pedal_spec(&spec);
    print_validation_results(&result);
    if !result.is_ok() {
        println!(
            "\n{} Record has {} error(s); nothing written",
            "FAILED".red().bold(),
            result.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let target = model_path(&config.pedals_dir, &spec.slug);
    if target.exists() && !options.force {
        anyhow::bail!(
            "Record already exists: {} (use --force to replace it)",
            target.display()
        );
    }

    fs::create_dir_all(&config.pedals_dir).with_context(|| {
        format!(
            "Failed to create pedals directory: {}",
            config.pedals_dir.display()
        )
    })?;
    let path = write_pedal_spec(&config.pedals_dir, &spec)?;

    println!(
        "\n{} Wrote {}",
        "SUCCESS".green().bold(),
        path.display()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::load_pedal_spec;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> AddOptions {
        AddOptions {
            name: "Deep Six".to_string(),
            manufacturer: "Walrus Audio".to_string(),
            pedal_type: Some("Compressor".to_string()),
            controls: Some(" Level, Sustain,,Blend , Attack ".to_string()),
            dimensions: Some("2.5\" x 4.75\" x 1.5\"".to_string()),
            pedals_dir: Some(dir.path().to_string_lossy().to_string()),
            ..AddOptions::default()
        }
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!(
            parse_controls(" Level, Sustain,,Blend , Attack "),
            vec!["Level", "Sustain", "Blend", "Attack"]
        );
        assert!(parse_controls("").is_empty());
    }

    #[test]
    fn test_build_record_defaults() {
        let dir = TempDir::new().unwrap();
        let spec = build_record(&options(&dir));
        assert_eq!(spec.slug, "walrus-audio-deep-six");
        assert_eq!(spec.pedal_type, "compressor");
        assert_eq!(spec.bypass.as_deref(), Some(DEFAULT_BYPASS));
        assert_eq!(spec.controls.len(), 4);

        let powered = build_record(&AddOptions {
            milli_amps: Some(12.5),
            voltage: Some(9.0),
            ..options(&dir)
        });
        assert_eq!(powered.milli_amps, Some(12.5));
        assert_eq!(powered.voltage, Some(9.0));

        let bare = build_record(&AddOptions {
            name: "X".to_string(),
            manufacturer: "Y".to_string(),
            ..AddOptions::default()
        });
        assert_eq!(bare.pedal_type, "other");
        assert!(bare.controls.is_empty());
    }

    #[test]
    fn test_add_writes_record() {
        let dir = TempDir::new().unwrap();
        assert_eq!(run(&options(&dir)).unwrap(), ExitCode::SUCCESS);

        let spec = load_pedal_spec(&dir.path().join("walrus-audio-deep-six.json")).unwrap();
        assert_eq!(spec, build_record(&options(&dir)));
    }

    #[test]
    fn test_add_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        run(&options(&dir)).unwrap();

        let err = run(&options(&dir)).unwrap_err();
        assert!(err.to_string().contains("--force"));

        let forced = AddOptions {
            force: true,
            ..options(&dir)
        };
        assert_eq!(run(&forced).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_add_rejects_bad_dimensions() {
        let dir = TempDir::new().unwrap();
        let bad = AddOptions {
            dimensions: Some("about two inches".to_string()),
            ..options(&dir)
        };
        assert_eq!(run(&bad).unwrap(), ExitCode::from(1));
        assert!(!dir.path().join("walrus-audio-deep-six.json").exists());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let bad = AddOptions {
            name: "   ".to_string(),
            ..options(&dir)
        };
        assert_eq!(run(&bad).unwrap(), ExitCode::from(1));
    }
}
