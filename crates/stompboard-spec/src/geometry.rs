//! Geometric primitives and their renderer parameters.

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions3D;
use crate::error::ModelError;

/// Radial segment count renderers use for cylinders.
pub const CYLINDER_RADIAL_SEGMENTS: u32 = 16;

/// A spatial offset, or an Euler rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// The origin / identity rotation.
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Primitive shape of a model component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GeometryKind {
    Box,
    Cylinder,
    Plane,
}

impl GeometryKind {
    /// Returns the kind as it appears in model JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Box => "box",
            GeometryKind::Cylinder => "cylinder",
            GeometryKind::Plane => "plane",
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GeometryKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(GeometryKind::Box),
            "cylinder" => Ok(GeometryKind::Cylinder),
            "plane" => Ok(GeometryKind::Plane),
            _ => Err(ModelError::UnsupportedGeometryKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for GeometryKind {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Kind of a whole model: a single primitive, or a compound of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Box,
    Cylinder,
    Compound,
}

/// Renderer-facing parameters of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "geometry", rename_all = "lowercase")]
pub enum GeometryParams {
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    },
    Plane {
        width: f64,
        depth: f64,
    },
}

/// Maps a primitive and its dimensions onto renderer geometry.
///
/// Cylinders take their radius from half the width; planes ignore height.
pub fn geometry_params(kind: GeometryKind, dimensions: &Dimensions3D) -> GeometryParams {
    match kind {
        GeometryKind::Box => GeometryParams::Box {
            width: dimensions.width,
            height: dimensions.height,
            depth: dimensions.depth,
        },
        GeometryKind::Cylinder => GeometryParams::Cylinder {
            radius_top: dimensions.width / 2.0,
            radius_bottom: dimensions.width / 2.0,
            height: dimensions.height,
            radial_segments: CYLINDER_RADIAL_SEGMENTS,
        },
        GeometryKind::Plane => GeometryParams::Plane {
            width: dimensions.width,
            depth: dimensions.depth,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_geometry_kind_json() {
        assert_eq!(
            serde_json::to_string(&GeometryKind::Cylinder).unwrap(),
            "\"cylinder\""
        );
        let parsed: GeometryKind = serde_json::from_str("\"plane\"").unwrap();
        assert_eq!(parsed, GeometryKind::Plane);
    }

    #[test]
    fn test_unsupported_geometry_kind() {
        let err = "sphere".parse::<GeometryKind>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnsupportedGeometryKind {
                kind: "sphere".to_string()
            }
        );

        let err = serde_json::from_str::<GeometryKind>("\"torus\"").unwrap_err();
        assert!(err.to_string().contains("unsupported geometry kind 'torus'"));
    }

    #[test]
    fn test_model_kind_json() {
        assert_eq!(
            serde_json::to_string(&ModelKind::Compound).unwrap(),
            "\"compound\""
        );
    }

    #[test]
    fn test_cylinder_params() {
        let params = geometry_params(GeometryKind::Cylinder, &Dimensions3D::new(12.0, 4.0, 12.0));
        assert_eq!(
            params,
            GeometryParams::Cylinder {
                radius_top: 6.0,
                radius_bottom: 6.0,
                height: 4.0,
                radial_segments: 16,
            }
        );
    }

    #[test]
    fn test_box_and_plane_params() {
        let dims = Dimensions3D::new(10.0, 2.0, 5.0);
        assert_eq!(
            geometry_params(GeometryKind::Box, &dims),
            GeometryParams::Box {
                width: 10.0,
                height: 2.0,
                depth: 5.0
            }
        );
        assert_eq!(
            geometry_params(GeometryKind::Plane, &dims),
            GeometryParams::Plane {
                width: 10.0,
                depth: 5.0
            }
        );
    }

    #[test]
    fn test_vector_finite() {
        assert!(Vector3D::ZERO.is_finite());
        assert!(!Vector3D::new(f64::INFINITY, 0.0, 0.0).is_finite());
    }
}
