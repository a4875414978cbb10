//! Procedural knob placement.
//!
//! Knobs sit on the top face of the enclosure, centered on the origin. Up to
//! three knobs share a single row near the rear edge; more knobs are split
//! into two rows of `ceil(n / 2)`, the second row one pitch closer to the
//! front.

use crate::geometry::Vector3D;

/// Height of a knob's origin above the body origin.
pub const KNOB_HEIGHT: f64 = 8.0;
/// Clearance between the outermost knobs and the side edges.
pub const EDGE_MARGIN_X: f64 = 15.0;
/// Clearance between the first row and the rear edge.
pub const EDGE_MARGIN_Z: f64 = 10.0;
/// Additional inset of the first row.
pub const ROW_INSET: f64 = 15.0;
/// Distance between the two knob rows.
pub const ROW_PITCH: f64 = 20.0;
/// Largest knob count that still fits on a single row.
pub const MAX_SINGLE_ROW: usize = 3;

/// Computes knob positions for `count` controls on a body of the given
/// width and depth.
///
/// Returns exactly `count` positions in control order. A single knob is
/// centered; zero knobs yield an empty vector.
pub fn knob_positions(count: usize, width: f64, depth: f64) -> Vec<Vector3D> {
    if count == 0 {
        return Vec::new();
    }

    let per_row = if count <= MAX_SINGLE_ROW {
        count
    } else {
        count.div_ceil(2)
    };
    let spacing = row_spacing(width, per_row);

    (0..count)
        .map(|i| {
            let row = i / per_row;
            let col = i % per_row;
            let x = if per_row == 1 {
                0.0
            } else {
                -width / 2.0 + EDGE_MARGIN_X + col as f64 * spacing
            };
            let z = depth / 2.0 - EDGE_MARGIN_Z - row as f64 * ROW_PITCH - ROW_INSET;
            Vector3D::new(x, KNOB_HEIGHT, z)
        })
        .collect()
}

/// Even spacing for `per_row` knobs across the usable width.
fn row_spacing(width: f64, per_row: usize) -> f64 {
    let gaps = per_row.saturating_sub(1).max(1);
    (width - 2.0 * EDGE_MARGIN_X) / gaps as f64
}
