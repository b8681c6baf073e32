//! Error types for the heightmap mesher.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using MesherError.
pub type Result<T> = std::result::Result<T, MesherError>;

/// Main error type for heightmap meshing operations.
#[derive(Error, Debug)]
pub enum MesherError {
    /// Source image path does not exist.
    #[error("image not found: {0}")]
    ImageNotFound(PathBuf),

    /// Failed to decode the source image.
    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Target mesh resolution is unusable.
    #[error("invalid mesh dimension: {0}")]
    InvalidDimension(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize glTF JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to export mesh.
    #[error("export error: {0}")]
    Export(String),

    /// Could not create or write the destination file.
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
