//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `validate` and `inspect`. Nothing in this
//! module writes colored text.

use serde::{Deserialize, Serialize};
use stompboard_spec::{GeometryParams, ValidationError, ValidationWarning};

use crate::input::RecordError;

/// Error codes for CLI-level failures.
///
/// Validation codes (`E001`, `W001`, ...) and model codes (`MODEL_001`, ...)
/// pass through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Slug unusable as a file name
    pub const INVALID_SLUG: &str = "CLI_003";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a RecordError to a JsonError.
pub fn record_error_to_json(err: &RecordError) -> JsonError {
    let code = match err {
        RecordError::RecordReadFailure { .. } => error_codes::FILE_READ,
        RecordError::RecordParseFailure { .. } => error_codes::JSON_PARSE,
        RecordError::Model { source, .. } => source.code(),
        RecordError::InvalidSlug { .. } => error_codes::INVALID_SLUG,
        RecordError::RecordWriteFailure { .. } => error_codes::FILE_WRITE,
    };
    JsonError::new(code, err.to_string()).with_file(err.path().display().to_string())
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Slug of the record, when it could be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Canonical record hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
}

impl ValidateOutput {
    /// Output for a record that could not be loaded.
    pub fn load_failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            warnings: Vec::new(),
            slug: None,
            spec_hash: None,
        }
    }
}

/// One component as reported by `inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectComponent {
    /// Component name
    pub name: String,
    /// Renderer geometry for the component
    pub geometry: GeometryParams,
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Whether the model loaded and validated
    pub success: bool,
    /// Errors from loading or validation
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Model slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Canonical model hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_hash: Option<String>,
    /// Per-component geometry
    pub components: Vec<InspectComponent>,
}

impl InspectOutput {
    /// Output for a model that could not be loaded.
    pub fn load_failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            warnings: Vec::new(),
            slug: None,
            model_hash: None,
            components: Vec::new(),
        }
    }
}
