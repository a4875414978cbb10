//! Pedalboard layout.

use serde::{Deserialize, Serialize};

use crate::geometry::Vector3D;

/// Default center-to-center distance between pedals on a board, in mm.
pub const DEFAULT_BOARD_SPACING: f64 = 150.0;

/// One pedal placed on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSlot {
    /// Slug of the model to place.
    pub slug: String,
    pub position: Vector3D,
}

/// A row of pedals centered on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedalBoard {
    pub name: String,
    pub spacing: f64,
    pub slots: Vec<BoardSlot>,
}

/// Lays out pedals left to right in the given order, centered on x = 0.
pub fn layout_board<I, S>(slugs: I, spacing: f64) -> PedalBoard
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let slugs: Vec<String> = slugs.into_iter().map(Into::into).collect();
    let center = (slugs.len() as f64 - 1.0) / 2.0;
    let slots = slugs
        .into_iter()
        .enumerate()
        .map(|(i, slug)| BoardSlot {
            slug,
            position: Vector3D::new((i as f64 - center) * spacing, 0.0, 0.0),
        })
        .collect();

    PedalBoard {
        name: "pedalboard".to_string(),
        spacing,
        slots,
    }
}
