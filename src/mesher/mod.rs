//! Mesh generation from height fields.
//!
//! This module runs the image-to-mesh pipeline: preprocessing, height
//! derivation, lattice triangulation and vertex coloring.

pub mod color;
pub mod geometry;
pub mod grid;

pub use geometry::{Mesh, Vertex};

use crate::error::Result;
use crate::heightfield;
use crate::preprocess;
use crate::types::{BoundingBox, IntensityGrid};
use glam::Vec3;

/// Main mesher configuration.
///
/// Defaults mirror the CLI defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MesherConfig {
    /// Target lattice width in vertices.
    pub width: u32,
    /// Target lattice height in vertices.
    pub height: u32,
    /// Vertical exaggeration applied to normalized intensity.
    pub z_scale: f32,
    /// Map dark pixels high instead of bright ones.
    pub invert: bool,
    /// Smoothing kernel size; forced odd when positive, 0 disables.
    pub blur: u32,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            z_scale: 0.12,
            invert: false,
            blur: 3,
        }
    }
}

/// Output from the mesher.
#[derive(Debug)]
pub struct MesherOutput {
    /// The colored heightfield mesh.
    pub mesh: Mesh,
    /// Bounding box of the mesh.
    pub bounds: BoundingBox,
    /// Lattice width the mesh was built at.
    pub width: u32,
    /// Lattice height the mesh was built at.
    pub height: u32,
}

impl MesherOutput {
    /// Get the vertex count.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Get the triangle count.
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// The main mesher struct.
#[derive(Debug, Clone, Default)]
pub struct Mesher {
    config: MesherConfig,
}

impl Mesher {
    /// Create a new mesher with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesher with custom configuration.
    pub fn with_config(config: MesherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Run the full pipeline on a decoded intensity grid.
    ///
    /// The source is resampled and smoothed, mapped to elevations, laid out
    /// on the lattice and colored from the pre-inversion intensities. One
    /// pass, no state kept between calls.
    pub fn mesh(&self, source: &IntensityGrid) -> Result<MesherOutput> {
        let cfg = &self.config;

        let processed = preprocess::preprocess(source, cfg.width, cfg.height, cfg.blur)?;
        let heights = heightfield::build_height_field(&processed, cfg.invert, cfg.z_scale);
        let colors = color::derive_vertex_colors(&processed);
        let mesh = grid::build_grid_mesh(&heights, &colors);

        let bounds = BoundingBox::from_points(mesh.vertices.iter().map(|v| v.position))
            .unwrap_or(BoundingBox::new(Vec3::ZERO, Vec3::ZERO));

        Ok(MesherOutput {
            mesh,
            bounds,
            width: cfg.width,
            height: cfg.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_source(value: u8) -> IntensityGrid {
        IntensityGrid::new(4, 4, vec![value; 16])
    }

    fn config(width: u32, height: u32) -> MesherConfig {
        MesherConfig {
            width,
            height,
            z_scale: 0.1,
            invert: false,
            blur: 0,
        }
    }

    #[test]
    fn test_uniform_image_yields_flat_plane() {
        let mesher = Mesher::with_config(config(4, 4));
        let output = mesher.mesh(&uniform_source(128)).unwrap();

        assert_eq!(output.vertex_count(), 16);
        assert_eq!(output.triangle_count(), 18);

        let expected_z = 0.1 * 128.0 / 255.0;
        for vertex in &output.mesh.vertices {
            assert!((vertex.position[2] - expected_z).abs() < 1e-6);
            assert_eq!(vertex.color, output.mesh.vertices[0].color);
        }
    }

    #[test]
    fn test_bounds_cover_unit_footprint() {
        let mesher = Mesher::with_config(config(8, 8));
        let output = mesher.mesh(&uniform_source(255)).unwrap();

        assert_eq!(output.bounds.min.x, -0.5);
        assert_eq!(output.bounds.max.x, 0.5);
        assert_eq!(output.bounds.min.y, -0.5);
        assert_eq!(output.bounds.max.y, 0.5);
        assert!((output.bounds.max.z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_single_row_target_yields_no_triangles() {
        let mesher = Mesher::with_config(config(5, 1));
        let output = mesher.mesh(&uniform_source(10)).unwrap();

        assert_eq!(output.vertex_count(), 5);
        assert_eq!(output.triangle_count(), 0);
    }

    #[test]
    fn test_colors_ignore_inversion() {
        let source = uniform_source(200);
        let plain = Mesher::with_config(config(4, 4)).mesh(&source).unwrap();

        let mut inverted_cfg = config(4, 4);
        inverted_cfg.invert = true;
        let inverted = Mesher::with_config(inverted_cfg).mesh(&source).unwrap();

        for (a, b) in plain.mesh.vertices.iter().zip(&inverted.mesh.vertices) {
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let data: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let source = IntensityGrid::new(8, 8, data);

        let cfg = MesherConfig {
            width: 16,
            height: 12,
            z_scale: 0.2,
            invert: true,
            blur: 3,
        };
        let a = Mesher::with_config(cfg.clone()).mesh(&source).unwrap();
        let b = Mesher::with_config(cfg).mesh(&source).unwrap();

        assert_eq!(a.mesh, b.mesh);
    }

    #[test]
    fn test_invalid_target_resolution_propagates() {
        let mesher = Mesher::with_config(config(0, 4));
        assert!(mesher.mesh(&uniform_source(0)).is_err());
    }
}
