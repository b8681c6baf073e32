//! Height derivation from intensity.

use crate::types::{HeightField, IntensityGrid};

/// Map grid intensities into elevations.
///
/// Each intensity is normalized to [0, 1], optionally inverted, then scaled
/// by `z_scale`. A negative `z_scale` flips the relief orientation.
pub fn build_height_field(grid: &IntensityGrid, invert: bool, z_scale: f32) -> HeightField {
    let heights = grid
        .data()
        .iter()
        .map(|&v| {
            let norm = v as f32 / 255.0;
            let depth = if invert { 1.0 - norm } else { norm };
            depth * z_scale
        })
        .collect();

    HeightField::new(grid.width, grid.height, heights)
}
