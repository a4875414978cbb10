//! Physical dimensions and the free-form dimension string parser.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Decimal number with optional integer and fractional parts. ASCII digits
/// only; `\d` would also match other scripts' digits, which `f64` cannot parse.
const DECIMAL_PATTERN: &str = r"[0-9]*\.?[0-9]+";

static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(DECIMAL_PATTERN).expect("invalid regex pattern"))
}

/// Extent of a body or component in millimeters.
///
/// `width` is the left-right extent, `depth` front-back, `height` vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions3D {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions3D {
    /// Creates dimensions from width, height, and depth.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// True if every extent is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Converts inches to millimeters.
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Parses a dimension string such as `4.77" x 2.6" x 1.39"` into millimeters.
///
/// The first three decimal numbers are read as inches, in the order the
/// catalog writes them: length, width, height. Length becomes the model's
/// `width` and width becomes its `depth`; downstream layouts rely on this
/// mapping.
///
/// # Errors
/// Returns [`ModelError::MalformedDimensions`] when fewer than three numbers
/// are present, and [`ModelError::DimensionOutOfRange`] when one of the three
/// does not fit in an `f64` once converted to millimeters.
///
/// # Example
/// ```
/// use stompboard_spec::dimensions::parse_dimensions;
///
/// let dims = parse_dimensions("4.77\" x 2.6\" x 1.39\"").unwrap();
/// assert!((dims.width - 121.158).abs() < 1e-9);
/// assert!((dims.depth - 66.04).abs() < 1e-9);
/// assert!((dims.height - 35.306).abs() < 1e-9);
/// ```
pub fn parse_dimensions(input: &str) -> Result<Dimensions3D, ModelError> {
    let malformed = |found| ModelError::MalformedDimensions {
        input: input.to_string(),
        found,
    };

    let numbers: Vec<&str> = decimal_regex()
        .find_iter(input)
        .map(|m| m.as_str())
        .collect();
    if numbers.len() < 3 {
        return Err(malformed(numbers.len()));
    }

    let mut values = [0.0f64; 3];
    for (slot, text) in values.iter_mut().zip(&numbers) {
        let out_of_range = || ModelError::DimensionOutOfRange {
            input: input.to_string(),
            number: text.to_string(),
        };
        let inches: f64 = text.parse().map_err(|_| out_of_range())?;
        let mm = inches_to_mm(inches);
        if !mm.is_finite() {
            return Err(out_of_range());
        }
        *slot = mm;
    }

    let [length, width, height] = values;
    Ok(Dimensions3D {
        width: length,
        height,
        depth: width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_parse_catalog_format() {
        let dims = parse_dimensions("4.77\" x 2.6\" x 1.39\"").unwrap();
        assert_close(dims.width, 121.158);
        assert_close(dims.depth, 66.04);
        assert_close(dims.height, 35.306);
    }

    #[test]
    fn test_parse_integers_and_odd_separators() {
        let dims = parse_dimensions("5 in / 3in by 2 inches").unwrap();
        assert_close(dims.width, 127.0);
        assert_close(dims.depth, 76.2);
        assert_close(dims.height, 50.8);
    }

    #[test]
    fn test_parse_leading_fraction() {
        let dims = parse_dimensions(".5 x 1.25 x 2").unwrap();
        assert_close(dims.width, 12.7);
        assert_close(dims.depth, 31.75);
        assert_close(dims.height, 50.8);
    }

    #[test]
    fn test_extra_numbers_are_ignored() {
        let dims = parse_dimensions("2.9 x 5.1 x 2.4 (W x D x H), 400 g").unwrap();
        assert_close(dims.width, 2.9 * MM_PER_INCH);
        assert_close(dims.depth, 5.1 * MM_PER_INCH);
        assert_close(dims.height, 2.4 * MM_PER_INCH);
    }

    #[test]
    fn test_too_few_numbers() {
        let err = parse_dimensions("4.77\" x 2.6\"").unwrap_err();
        assert_eq!(
            err,
            ModelError::MalformedDimensions {
                input: "4.77\" x 2.6\"".to_string(),
                found: 2,
            }
        );

        let err = parse_dimensions("compact").unwrap_err();
        assert!(matches!(
            err,
            ModelError::MalformedDimensions { found: 0, .. }
        ));
    }

    #[test]
    fn test_overflowing_number_is_out_of_range() {
        let huge = "9".repeat(400);
        let input = format!("{} x 1 x 1", huge);
        let err = parse_dimensions(&input).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionOutOfRange {
                input: input.clone(),
                number: huge,
            }
        );
        assert_eq!(err.code(), "MODEL_004");
        assert!(!err.to_string().contains("expected 3 numbers"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        // Arabic-Indic one in a revision label
        let dims = parse_dimensions("Rev \u{0661}: 4.77\" x 2.6\" x 1.39\"").unwrap();
        assert_close(dims.width, 121.158);
        assert_close(dims.depth, 66.04);
        assert_close(dims.height, 35.306);

        let err = parse_dimensions("\u{0664} x \u{0662} x \u{0661}").unwrap_err();
        assert!(matches!(
            err,
            ModelError::MalformedDimensions { found: 0, .. }
        ));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let input = "2.87\" x 5.12\" x 2.36\"";
        let a = parse_dimensions(input).unwrap();
        let b = parse_dimensions(input).unwrap();
        assert_eq!(a.width.to_bits(), b.width.to_bits());
        assert_eq!(a.height.to_bits(), b.height.to_bits());
        assert_eq!(a.depth.to_bits(), b.depth.to_bits());
    }

    #[test]
    fn test_dimensions_validity() {
        assert!(Dimensions3D::new(1.0, 0.0, 2.0).is_valid());
        assert!(!Dimensions3D::new(-1.0, 1.0, 1.0).is_valid());
        assert!(!Dimensions3D::new(f64::NAN, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_inches_to_mm() {
        assert_close(inches_to_mm(1.0), 25.4);
        assert_close(inches_to_mm(0.0), 0.0);
    }
}
