//! Record and model validation.

use std::collections::HashSet;

use crate::dimensions::parse_dimensions;
use crate::error::{
    ErrorCode, ModelError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::model::PedalModel;
use crate::pedal::{PedalSpec, PedalType};
use crate::slug::is_valid_slug;

/// Validates a pedal record.
///
/// Errors make the record unusable for generation (bad slug, unparseable
/// dimensions, missing identity). Warnings flag records that generate but
/// probably not the way the author intended.
///
/// # Example
/// ```
/// use stompboard_spec::PedalSpec;
/// use stompboard_spec::validation::validate_pedal_spec;
///
/// let spec = PedalSpec::builder("Boss", "SY-1")
///     .pedal_type("other")
///     .dimensions("2.87 x 5.12 x 2.36")
///     .control("Level")
///     .build();
/// assert!(validate_pedal_spec(&spec).is_ok());
/// ```
pub fn validate_pedal_spec(spec: &PedalSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    if spec.name.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyName,
            "name must not be empty",
            "name",
        ));
    }
    if spec.manufacturer.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyManufacturer,
            "manufacturer must not be empty",
            "manufacturer",
        ));
    }

    if !is_valid_slug(&spec.slug) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSlug,
            format!(
                "slug '{}' must be lowercase letters and digits separated by single hyphens",
                spec.slug
            ),
            "slug",
        ));
    } else {
        let derived = spec.derived_slug();
        if derived != spec.slug {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::SlugMismatch,
                format!(
                    "slug '{}' differs from '{}' derived from manufacturer and name",
                    spec.slug, derived
                ),
                "slug",
            ));
        }
    }

    match spec.dimensions.as_deref() {
        Some(raw) => {
            if let Err(e) = parse_dimensions(raw) {
                let code = match e {
                    ModelError::DimensionOutOfRange { .. } => ErrorCode::InvalidDimension,
                    _ => ErrorCode::MalformedDimensions,
                };
                result.add_error(ValidationError::with_path(
                    code,
                    e.to_string(),
                    "dimensions",
                ));
            }
        }
        None => result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDimensions,
            "no dimensions; no model will be generated",
            "dimensions",
        )),
    }

    if spec.controls.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoControls,
            "no controls listed; the model will have no knobs",
            "controls",
        ));
    }

    if PedalType::parse(&spec.pedal_type).is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnknownPedalType,
            format!("unknown pedal type '{}', treated as 'other'", spec.pedal_type),
            "type",
        ));
    }

    result
}

/// Validates a model description.
///
/// Checks the slug, that every extent is finite and non-negative, that every
/// position and rotation is finite, and that component names are unique.
/// Unknown geometry kinds never reach this point; they are rejected when the
/// model is parsed.
pub fn validate_model(model: &PedalModel) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !is_valid_slug(&model.slug) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSlug,
            format!("slug '{}' is not a valid slug", model.slug),
            "slug",
        ));
    }

    if !model.dimensions.is_valid() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDimension,
            "body dimensions must be finite and non-negative",
            "dimensions",
        ));
    }

    let mut seen = HashSet::new();
    for (i, component) in model.components.iter().enumerate() {
        if !seen.insert(component.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateComponentName,
                format!("duplicate component name '{}'", component.name),
                format!("components[{}].name", i),
            ));
        }
        if !component.dimensions.is_valid() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDimension,
                format!("component '{}' has an invalid size", component.name),
                format!("components[{}].dimensions", i),
            ));
        }
        if !component.position.is_finite() || !component.rotation.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDimension,
                format!("component '{}' has a non-finite transform", component.name),
                format!("components[{}]", i),
            ));
        }
    }

    result
}
