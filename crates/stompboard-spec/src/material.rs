//! Surface materials.

use serde::{Deserialize, Serialize};

/// Surface material of a model or component.
///
/// Each kind carries only the shading parameters it understands: basic
/// materials have an opacity, standard and physical materials have roughness
/// and metalness. Unset parameters are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Material {
    /// Unlit material.
    Basic {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    /// Metallic-roughness PBR material.
    Standard {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        roughness: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metalness: Option<f64>,
    },
    /// Extended PBR material.
    Physical {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        roughness: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metalness: Option<f64>,
    },
}

impl Material {
    /// Unlit material with an opacity.
    pub fn basic(color: impl Into<String>, opacity: f64) -> Self {
        Material::Basic {
            color: color.into(),
            opacity: Some(opacity),
        }
    }

    /// Standard material with roughness and metalness.
    pub fn standard(color: impl Into<String>, roughness: f64, metalness: f64) -> Self {
        Material::Standard {
            color: color.into(),
            roughness: Some(roughness),
            metalness: Some(metalness),
        }
    }

    /// Returns the material color.
    pub fn color(&self) -> &str {
        match self {
            Material::Basic { color, .. }
            | Material::Standard { color, .. }
            | Material::Physical { color, .. } => color,
        }
    }

    /// True if the material is see-through.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Material::Basic { opacity: Some(o), .. } if *o < 1.0)
    }
}
