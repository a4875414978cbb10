//! Property-based tests for the parser, layout engine, and slugs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p stompboard-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use stompboard_spec::layout::{KNOB_HEIGHT, ROW_PITCH};
use stompboard_spec::{
    create_slug, generate_pedal_model, is_valid_slug, knob_positions, parse_dimensions,
    pedal_slug, ModelError, PedalSpec, MM_PER_INCH,
};

// ============================================================================
// 1. Dimension Parser
// ============================================================================

/// Inch values as they appear in catalogs: up to two decimals.
fn inch_value() -> impl Strategy<Value = f64> {
    (0u32..2000).prop_map(|hundredths| f64::from(hundredths) / 100.0)
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" x "), Just("\" x "), Just("x"), Just(" × "), Just(" by ")]
}

proptest! {
    /// Arbitrary input never panics.
    #[test]
    fn parse_never_panics(s in "\\PC{0,64}") {
        let _ = parse_dimensions(&s);
    }

    /// Parsing the same string twice yields bit-identical results.
    #[test]
    fn parse_is_idempotent(s in "[0-9x .\"a-z]{0,40}") {
        let a = parse_dimensions(&s);
        let b = parse_dimensions(&s);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.width.to_bits(), b.width.to_bits());
                prop_assert_eq!(a.height.to_bits(), b.height.to_bits());
                prop_assert_eq!(a.depth.to_bits(), b.depth.to_bits());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "results differ"),
        }
    }

    /// Each inch value is scaled by 25.4 and mapped length, width, height.
    #[test]
    fn parse_converts_inches(
        l in inch_value(),
        w in inch_value(),
        h in inch_value(),
        sep in separator(),
    ) {
        let input = format!("{}{}{}{}{}\"", l, sep, w, sep, h);
        let d = parse_dimensions(&input).unwrap();
        prop_assert!((d.width - l * MM_PER_INCH).abs() < 1e-9);
        prop_assert!((d.depth - w * MM_PER_INCH).abs() < 1e-9);
        prop_assert!((d.height - h * MM_PER_INCH).abs() < 1e-9);
    }

    /// Fewer than three numbers is always malformed.
    #[test]
    fn parse_rejects_short_input(a in inch_value(), b in inch_value(), two in any::<bool>()) {
        let input = if two { format!("{} x {}", a, b) } else { format!("{} in", a) };
        let found = if two { 2 } else { 1 };
        prop_assert_eq!(
            parse_dimensions(&input),
            Err(ModelError::MalformedDimensions { input: input.clone(), found })
        );
    }
}

// ============================================================================
// 2. Knob Layout
// ============================================================================

proptest! {
    /// Layout yields one position per control, all at knob height.
    #[test]
    fn layout_count_and_height(
        count in 0usize..16,
        width in 40.0f64..200.0,
        depth in 40.0f64..200.0,
    ) {
        let positions = knob_positions(count, width, depth);
        prop_assert_eq!(positions.len(), count);
        prop_assert!(positions.iter().all(|p| p.y == KNOB_HEIGHT));
    }

    /// Up to three knobs share one row; more split into two rows with the
    /// first row holding ceil(n/2).
    #[test]
    fn layout_rows(
        count in 1usize..16,
        width in 40.0f64..200.0,
        depth in 40.0f64..200.0,
    ) {
        let positions = knob_positions(count, width, depth);
        let front_z = positions[0].z;
        let first_row = positions.iter().filter(|p| p.z == front_z).count();

        if count <= 3 {
            prop_assert_eq!(first_row, count);
        } else {
            prop_assert_eq!(first_row, count.div_ceil(2));
            for p in &positions[first_row..] {
                prop_assert!((p.z - (front_z - ROW_PITCH)).abs() < 1e-9);
            }
        }
    }

    /// Knobs within a row run left to right.
    #[test]
    fn layout_rows_are_ordered(count in 2usize..16, width in 40.0f64..200.0) {
        let positions = knob_positions(count, width, 100.0);
        let per_row = if count <= 3 { count } else { count.div_ceil(2) };
        for row in positions.chunks(per_row) {
            for pair in row.windows(2) {
                prop_assert!(pair[0].x < pair[1].x);
            }
        }
    }

    /// Every generated model lists knobs first, one per control.
    #[test]
    fn model_has_one_knob_per_control(controls in prop::collection::vec("[A-Za-z]{1,8}", 0..10)) {
        let spec = PedalSpec::builder("Boss", "Test")
            .dimensions("2.87 x 5.12 x 2.36")
            .controls(controls.clone())
            .build();
        let model = generate_pedal_model(&spec).unwrap();
        prop_assert_eq!(model.components.len(), controls.len() + 4);
        for (i, component) in model.components.iter().take(controls.len()).enumerate() {
            prop_assert_eq!(&component.name, &format!("knob-{}", i));
        }
    }
}

// ============================================================================
// 3. Slugs
// ============================================================================

proptest! {
    /// Slugs derived from any text are either empty or valid.
    #[test]
    fn created_slugs_are_valid(text in "\\PC{0,40}") {
        let slug = create_slug(&text);
        prop_assert!(slug.is_empty() || is_valid_slug(&slug), "slug: {:?}", slug);
    }

    /// Deriving a slug is idempotent.
    #[test]
    fn slug_is_idempotent(text in "[A-Za-z0-9 _.-]{0,40}") {
        let once = create_slug(&text);
        prop_assert_eq!(create_slug(&once), once);
    }

    /// Pedal slugs start with the manufacturer's slug.
    #[test]
    fn pedal_slug_prefix(manufacturer in "[A-Za-z]{1,12}", name in "[A-Za-z0-9]{1,12}") {
        let slug = pedal_slug(&manufacturer, &name);
        prop_assert!(slug.starts_with(&create_slug(&manufacturer)));
        prop_assert!(is_valid_slug(&slug));
    }
}
