//! # Heightmap Mesher
//!
//! A Rust library for converting grayscale images into 3D heightfield
//! meshes.
//!
//! ## Overview
//!
//! This library takes a raster image as input and produces a colored grid
//! mesh (GLB/glTF) whose elevations follow pixel intensity: bright pixels
//! rise, dark pixels stay low (or the reverse with inversion). Each vertex
//! carries the source intensity as an RGBA vertex color, so downstream
//! tools can shade or re-texture the relief without the original image.
//!
//! ## Quick Start
//!
//! ```ignore
//! use heightmap_mesher::{load_image, Mesher, export_glb};
//!
//! // Decode an image into an intensity grid
//! let source = load_image("heightmap.png")?;
//!
//! // Run the pipeline with default settings (256x256, z-scale 0.12)
//! let mesher = Mesher::new();
//! let output = mesher.mesh(&source)?;
//!
//! // Export to GLB
//! let glb_bytes = export_glb(&output)?;
//! ```
//!
//! ## Pipeline
//!
//! `load_image` decodes and grayscales the source. [`Mesher::mesh`] then
//! resamples it to the target lattice resolution, optionally smooths it,
//! maps intensities to elevations, lays the vertices on a unit-footprint
//! lattice and triangulates it with a fixed diagonal split. The result is
//! written with [`write_glb`] (binary glTF) or [`write_obj`] (Wavefront).

pub mod error;
pub mod export;
pub mod heightfield;
pub mod loader;
pub mod mesher;
pub mod preprocess;
pub mod types;

// Re-export main types for convenience
pub use error::{MesherError, Result};
pub use export::gltf::{export_glb, write_glb};
pub use export::obj::{export_obj, write_obj};
pub use mesher::{Mesh, Mesher, MesherConfig, MesherOutput, Vertex};
pub use types::{BoundingBox, HeightField, IntensityGrid};

/// Load an image from a file path and reduce it to an intensity grid.
pub fn load_image<P: AsRef<std::path::Path>>(path: P) -> Result<IntensityGrid> {
    loader::load_from_path(path)
}

/// Load an image from encoded bytes (for WASM compatibility).
pub fn load_image_from_bytes(data: &[u8]) -> Result<IntensityGrid> {
    loader::load_from_bytes(data)
}

#[cfg(feature = "wasm")]
pub mod wasm;
