//! Model assembly: pedal record in, compound model description out.

use std::f64::consts::FRAC_PI_2;

use crate::color::resolve_body_color;
use crate::dimensions::{parse_dimensions, Dimensions3D};
use crate::error::ModelError;
use crate::geometry::{GeometryKind, ModelKind, Vector3D};
use crate::layout::knob_positions;
use crate::material::Material;
use crate::model::{Component, PedalModel};
use crate::pedal::PedalSpec;

/// Painted-metal enclosure finish.
const BODY_ROUGHNESS: f64 = 0.8;
const BODY_METALNESS: f64 = 0.1;

const KNOB_SIZE: Dimensions3D = Dimensions3D::new(8.0, 6.0, 8.0);
const KNOB_COLOR: &str = "#1f2937";

const FOOTSWITCH_SIZE: Dimensions3D = Dimensions3D::new(12.0, 4.0, 12.0);
const FOOTSWITCH_COLOR: &str = "#374151";
/// Footswitch distance from the front edge.
const FOOTSWITCH_INSET: f64 = 20.0;
const FOOTSWITCH_HEIGHT: f64 = 4.0;

/// Quarter-inch jack.
const JACK_SIZE: Dimensions3D = Dimensions3D::new(6.35, 10.0, 6.35);
const JACK_COLOR: &str = "#000000";
/// Jack distance from the side edge.
const JACK_INSET: f64 = 5.0;

const LED_SIZE: Dimensions3D = Dimensions3D::new(2.0, 2.0, 2.0);
const LED_COLOR: &str = "#ef4444";
const LED_OPACITY: f64 = 0.8;
/// LED distance from the rear edge.
const LED_INSET: f64 = 10.0;

/// Generates the model description for one pedal record.
///
/// Knobs come first, one per control in control order (`knob-0`,
/// `knob-1`, ...), followed by the footswitch, input and output jacks, and
/// the status LED. The function is pure: the same record always produces
/// the same model.
///
/// # Errors
/// [`ModelError::MissingDimensions`] if the record has no dimension string,
/// [`ModelError::MalformedDimensions`] if it cannot be parsed.
///
/// # Example
/// ```
/// use stompboard_spec::{generate_pedal_model, PedalSpec};
///
/// let spec = PedalSpec::builder("Boss", "SY-1")
///     .dimensions("2.87\" x 5.12\" x 2.36\"")
///     .controls(["Variation", "Type", "Level", "Tone"])
///     .build();
///
/// let model = generate_pedal_model(&spec).unwrap();
/// assert_eq!(model.slug, "boss-sy-1");
/// assert_eq!(model.components.len(), 4 + 4);
/// ```
pub fn generate_pedal_model(spec: &PedalSpec) -> Result<PedalModel, ModelError> {
    let raw = spec
        .dimensions
        .as_deref()
        .ok_or_else(|| ModelError::MissingDimensions {
            slug: spec.slug.clone(),
        })?;
    let dimensions = parse_dimensions(raw)?;
    let body_color = resolve_body_color(&spec.manufacturer);

    let knobs = knob_positions(spec.controls.len(), dimensions.width, dimensions.depth);
    let mut components = Vec::with_capacity(knobs.len() + 4);
    components.extend(knobs.into_iter().enumerate().map(|(i, position)| knob(i, position)));
    components.push(footswitch(&dimensions));
    components.push(jack("input-jack", -1.0, &dimensions));
    components.push(jack("output-jack", 1.0, &dimensions));
    components.push(led(&dimensions));

    Ok(PedalModel {
        name: spec.name.clone(),
        slug: spec.slug.clone(),
        kind: ModelKind::Compound,
        dimensions,
        position: Vector3D::ZERO,
        rotation: Vector3D::ZERO,
        material: Material::standard(body_color, BODY_ROUGHNESS, BODY_METALNESS),
        components,
    })
}

fn knob(index: usize, position: Vector3D) -> Component {
    Component::new(
        format!("knob-{}", index),
        GeometryKind::Cylinder,
        KNOB_SIZE,
        position,
        Material::standard(KNOB_COLOR, 0.3, 0.7),
    )
}

fn footswitch(body: &Dimensions3D) -> Component {
    Component::new(
        "footswitch",
        GeometryKind::Cylinder,
        FOOTSWITCH_SIZE,
        Vector3D::new(0.0, FOOTSWITCH_HEIGHT, -body.depth / 2.0 + FOOTSWITCH_INSET),
        Material::standard(FOOTSWITCH_COLOR, 0.2, 0.8),
    )
}

/// `side` is -1 for the left edge, 1 for the right.
fn jack(name: &str, side: f64, body: &Dimensions3D) -> Component {
    Component::new(
        name,
        GeometryKind::Cylinder,
        JACK_SIZE,
        Vector3D::new(side * (body.width / 2.0 - JACK_INSET), body.height / 2.0, 0.0),
        Material::standard(JACK_COLOR, 0.1, 0.9),
    )
    .rotated(Vector3D::new(0.0, 0.0, FRAC_PI_2))
}

fn led(body: &Dimensions3D) -> Component {
    Component::new(
        "led",
        GeometryKind::Cylinder,
        LED_SIZE,
        Vector3D::new(0.0, body.height + 1.0, body.depth / 2.0 - LED_INSET),
        Material::basic(LED_COLOR, LED_OPACITY),
    )
}
