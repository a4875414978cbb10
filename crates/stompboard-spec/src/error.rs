//! Error types for record validation and model generation.

use thiserror::Error;

/// Error codes for pedal record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Slug is not lowercase hyphen-delimited alphanumerics
    InvalidSlug,
    /// E002: Dimension string has fewer than three numbers
    MalformedDimensions,
    /// E003: Pedal name is empty
    EmptyName,
    /// E004: Manufacturer is empty
    EmptyManufacturer,
    /// E005: Two components in one model share a name
    DuplicateComponentName,
    /// E006: A dimension is negative or not finite
    InvalidDimension,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSlug => "E001",
            ErrorCode::MalformedDimensions => "E002",
            ErrorCode::EmptyName => "E003",
            ErrorCode::EmptyManufacturer => "E004",
            ErrorCode::DuplicateComponentName => "E005",
            ErrorCode::InvalidDimension => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for pedal record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Slug differs from the one derived from manufacturer and name
    SlugMismatch,
    /// W002: No dimensions; no model can be generated
    MissingDimensions,
    /// W003: No controls listed
    NoControls,
    /// W004: Pedal type is not a known category
    UnknownPedalType,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::SlugMismatch => "W001",
            WarningCode::MissingDimensions => "W002",
            WarningCode::NoControls => "W003",
            WarningCode::UnknownPedalType => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "components\[2\].name").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of record or model validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Errors raised while turning a pedal record into a model description.
///
/// Any of these aborts assembly for the record that raised it; no partial
/// model is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The dimension string yielded fewer than three numbers.
    #[error("malformed dimensions '{input}': expected 3 numbers, found {found}")]
    MalformedDimensions { input: String, found: usize },

    /// The record has no dimension string at all.
    #[error("pedal '{slug}' has no dimensions")]
    MissingDimensions { slug: String },

    /// One of the three dimension numbers overflows once converted to mm.
    #[error("dimension '{number}' in '{input}' is out of range")]
    DimensionOutOfRange { input: String, number: String },

    /// A component names a primitive outside box, cylinder, and plane.
    #[error("unsupported geometry kind '{kind}' (expected box, cylinder, or plane)")]
    UnsupportedGeometryKind { kind: String },
}

impl ModelError {
    /// Stable code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::MalformedDimensions { .. } => "MODEL_001",
            ModelError::MissingDimensions { .. } => "MODEL_002",
            ModelError::UnsupportedGeometryKind { .. } => "MODEL_003",
            ModelError::DimensionOutOfRange { .. } => "MODEL_004",
        }
    }
}

/// Top-level error type for record and model I/O.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Model generation error.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
