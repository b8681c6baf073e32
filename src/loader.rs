//! Source image loading.

use std::path::Path;

use crate::error::{MesherError, Result};
use crate::types::IntensityGrid;

/// Load an image file and reduce it to a single-channel intensity grid.
///
/// Color inputs are converted to 8-bit luma; grayscale inputs pass through.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<IntensityGrid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MesherError::ImageNotFound(path.to_path_buf()));
    }

    let img = image::open(path)?;
    Ok(IntensityGrid::from_luma(img.to_luma8()))
}

/// Load an image from encoded bytes (for WASM compatibility).
pub fn load_from_bytes(data: &[u8]) -> Result<IntensityGrid> {
    let img = image::load_from_memory(data)?;
    Ok(IntensityGrid::from_luma(img.to_luma8()))
}
