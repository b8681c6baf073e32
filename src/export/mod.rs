//! Mesh export formats.
//!
//! This module provides exporters for the supported output containers.

pub mod gltf;
pub mod obj;

pub use gltf::{export_glb, write_glb};
pub use obj::{export_obj, write_obj};

use std::fs;
use std::path::Path;

use crate::error::{MesherError, Result};

/// Write bytes to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| MesherError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, data).map_err(|source| MesherError::Write {
        path: path.to_path_buf(),
        source,
    })
}
