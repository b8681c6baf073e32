//! Vertex color derivation.

use crate::types::IntensityGrid;

/// Derive one RGBA color per lattice vertex from pre-inversion intensities.
///
/// Intensity is replicated into r, g and b as normalized floats; alpha is
/// fully opaque. Output is row-major, matching the lattice vertex order.
pub fn derive_vertex_colors(grid: &IntensityGrid) -> Vec<[f32; 4]> {
    grid.data()
        .iter()
        .map(|&v| {
            let n = v as f32 / 255.0;
            [n, n, n, 1.0]
        })
        .collect()
}
