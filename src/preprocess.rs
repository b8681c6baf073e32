//! Grid preprocessing: resampling and smoothing.

use image::imageops::{self, FilterType};

use crate::error::{MesherError, Result};
use crate::types::IntensityGrid;

/// Resample `grid` to `width` x `height`, then optionally smooth it.
///
/// Downscaling uses an area-averaging filter and upscaling an interpolating
/// one. A positive `blur` kernel size is forced odd (`blur | 1`) and applied
/// as a separable Gaussian; `blur == 0` disables smoothing.
pub fn preprocess(
    grid: &IntensityGrid,
    width: u32,
    height: u32,
    blur: u32,
) -> Result<IntensityGrid> {
    if width == 0 || height == 0 {
        return Err(MesherError::InvalidDimension(format!(
            "target resolution must be at least 1x1, got {}x{}",
            width, height
        )));
    }

    let mut img = grid.to_luma();

    if (img.width(), img.height()) != (width, height) {
        let filter = if width < img.width() || height < img.height() {
            FilterType::Triangle
        } else {
            FilterType::CatmullRom
        };
        img = imageops::resize(&img, width, height, filter);
    }

    if blur > 0 {
        let ksize = blur | 1;
        img = imageops::blur(&img, gaussian_sigma(ksize));
    }

    Ok(IntensityGrid::from_luma(img))
}

/// Sigma for a Gaussian kernel of the given (odd) size, using the
/// conventional size-to-sigma rule for auto-selected sigmas.
fn gaussian_sigma(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_grid(width: u32, height: u32) -> IntensityGrid {
        let data = (0..width * height)
            .map(|i| (i * 255 / (width * height - 1)) as u8)
            .collect();
        IntensityGrid::new(width, height, data)
    }

    #[test]
    fn test_resamples_to_target_resolution() {
        let grid = gradient_grid(16, 8);

        let shrunk = preprocess(&grid, 4, 4, 0).unwrap();
        assert_eq!((shrunk.width, shrunk.height), (4, 4));

        let grown = preprocess(&grid, 32, 32, 0).unwrap();
        assert_eq!((grown.width, grown.height), (32, 32));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let grid = gradient_grid(4, 4);
        assert!(matches!(
            preprocess(&grid, 0, 4, 0),
            Err(MesherError::InvalidDimension(_))
        ));
        assert!(matches!(
            preprocess(&grid, 4, 0, 0),
            Err(MesherError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_even_kernel_forced_odd() {
        let grid = gradient_grid(8, 8);
        // 2 | 1 == 3, so both kernel sizes smooth identically.
        let even = preprocess(&grid, 8, 8, 2).unwrap();
        let odd = preprocess(&grid, 8, 8, 3).unwrap();
        assert_eq!(even, odd);
    }

    #[test]
    fn test_zero_blur_is_identity_at_same_resolution() {
        let grid = gradient_grid(8, 8);
        let processed = preprocess(&grid, 8, 8, 0).unwrap();
        assert_eq!(processed, grid);
    }

    #[test]
    fn test_blur_preserves_uniform_grid() {
        let grid = IntensityGrid::new(8, 8, vec![200; 64]);
        let smoothed = preprocess(&grid, 8, 8, 5).unwrap();
        assert!(smoothed.data().iter().all(|&v| v == 200));
    }
}
