//! Shared types used throughout the library.

use glam::Vec3;

/// A single-channel raster of 8-bit intensities, stored row-major.
///
/// Covers both the decoded source image and the resampled grid the mesher
/// consumes; both are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Wrap raw row-major intensity data.
    ///
    /// Panics if `data` does not hold exactly `width * height` values.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "intensity buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Intensity at (row, col).
    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.data[(row * self.width + col) as usize]
    }

    /// Row-major intensity values.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn from_luma(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub(crate) fn to_luma(&self) -> image::GrayImage {
        image::GrayImage::from_raw(self.width, self.height, self.data.clone())
            .expect("grid dimensions match buffer length")
    }
}

/// A grid of scalar elevations derived from image intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    data: Vec<f32>,
}

impl HeightField {
    /// Wrap raw row-major elevation data.
    ///
    /// Panics if `data` does not hold exactly `width * height` values.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "elevation buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Elevation at (row, col).
    pub fn get(&self, row: u32, col: u32) -> f32 {
        self.data[(row * self.width + col) as usize]
    }

    /// Row-major elevation values.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = [f32; 3]>) -> Option<Self> {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut has_points = false;

        for p in points {
            has_points = true;
            let p = Vec3::from_array(p);
            min = min.min(p);
            max = max.max(p);
        }

        has_points.then_some(Self { min, max })
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let grid = IntensityGrid::new(3, 2, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(grid.get(0, 0), 10);
        assert_eq!(grid.get(0, 2), 30);
        assert_eq!(grid.get(1, 0), 40);
        assert_eq!(grid.get(1, 2), 60);
    }

    #[test]
    #[should_panic]
    fn test_grid_rejects_mismatched_buffer() {
        IntensityGrid::new(2, 2, vec![0, 0, 0]);
    }

    #[test]
    fn test_bounding_box_from_points() {
        let points = [[0.0, 1.0, -2.0], [3.0, -1.0, 0.5]];
        let bounds = BoundingBox::from_points(points.into_iter()).unwrap();
        assert_eq!(bounds.min, Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 1.0, 0.5));
        assert_eq!(bounds.size(), Vec3::new(3.0, 2.0, 2.5));
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }
}
