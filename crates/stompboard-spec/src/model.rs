//! Generated model descriptions.

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions3D;
use crate::error::ModelError;
use crate::geometry::{geometry_params, GeometryKind, GeometryParams, ModelKind, Vector3D};
use crate::material::Material;

/// A named part of a model, positioned relative to the model origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Name, unique within the owning model.
    pub name: String,
    /// Primitive shape.
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub dimensions: Dimensions3D,
    pub position: Vector3D,
    pub rotation: Vector3D,
    pub material: Material,
}

impl Component {
    /// Creates an unrotated component.
    pub fn new(
        name: impl Into<String>,
        kind: GeometryKind,
        dimensions: Dimensions3D,
        position: Vector3D,
        material: Material,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            dimensions,
            position,
            rotation: Vector3D::ZERO,
            material,
        }
    }

    /// Sets the rotation (radians).
    pub fn rotated(mut self, rotation: Vector3D) -> Self {
        self.rotation = rotation;
        self
    }

    /// Renderer geometry for this component.
    pub fn geometry(&self) -> GeometryParams {
        geometry_params(self.kind, &self.dimensions)
    }
}

/// Render-ready description of one pedal.
///
/// Written once per generation run to `<slug>.json` and never patched in
/// place; regeneration replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedalModel {
    pub name: String,
    /// Same slug as the record this model was generated from.
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: ModelKind,
    /// Enclosure extent.
    pub dimensions: Dimensions3D,
    pub position: Vector3D,
    pub rotation: Vector3D,
    /// Enclosure material.
    pub material: Material,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl PedalModel {
    /// Parses a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks every `components[].type` in raw model JSON against the
    /// supported primitives.
    ///
    /// Lets loaders report an unknown primitive as
    /// [`ModelError::UnsupportedGeometryKind`] rather than a generic parse
    /// error. Entries without a string `type` are left for deserialization to
    /// reject.
    pub fn check_component_kinds(value: &serde_json::Value) -> Result<(), ModelError> {
        let Some(components) = value.get("components").and_then(|c| c.as_array()) else {
            return Ok(());
        };
        for kind in components
            .iter()
            .filter_map(|c| c.get("type").and_then(|t| t.as_str()))
        {
            kind.parse::<GeometryKind>()?;
        }
        Ok(())
    }

    /// Serializes the model to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the model to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// File name under which the model is stored.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.slug)
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Iterates over the knob components in control order.
    pub fn knobs(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| c.name.starts_with("knob-"))
    }
}
