//! Grid lattice layout and triangulation.

use glam::Vec3;

use crate::mesher::geometry::{Mesh, Vertex};
use crate::types::HeightField;

/// Build a grid mesh from a height field and per-vertex colors.
///
/// Vertices lie on a uniform lattice spanning [-0.5, 0.5] in x and y at any
/// resolution; the row axis is negated so the mesh's up matches the image's
/// visual up. Cell (r, c) with corners `i0` (top-left), `i1` (top-right),
/// `i2` (bottom-left), `i3` (bottom-right) splits into triangles
/// `(i0, i2, i1)` and `(i1, i2, i3)`, one diagonal direction across the
/// whole grid.
///
/// A lattice with fewer than 2 vertices on either axis emits its vertices
/// but no triangles.
pub fn build_grid_mesh(heights: &HeightField, colors: &[[f32; 4]]) -> Mesh {
    let (w, h) = (heights.width, heights.height);
    debug_assert_eq!(colors.len(), w as usize * h as usize);

    let mut mesh = Mesh::new();
    mesh.vertices.reserve(w as usize * h as usize);

    for r in 0..h {
        for c in 0..w {
            let pos = Vec3::new(
                lattice_coord(c, w),
                -lattice_coord(r, h),
                heights.get(r, c),
            );
            mesh.add_vertex(Vertex::new(pos.to_array(), colors[(r * w + c) as usize]));
        }
    }

    if w < 2 || h < 2 {
        return mesh;
    }

    mesh.indices.reserve(6 * (w as usize - 1) * (h as usize - 1));
    for r in 0..h - 1 {
        for c in 0..w - 1 {
            let i0 = r * w + c;
            let i1 = i0 + 1;
            let i2 = i0 + w;
            let i3 = i2 + 1;
            mesh.add_triangle(i0, i2, i1);
            mesh.add_triangle(i1, i2, i3);
        }
    }

    mesh
}

/// Position of lattice point `i` of `n` along one axis, in [-0.5, 0.5].
///
/// A single-point axis pins the coordinate at -0.5.
fn lattice_coord(i: u32, n: u32) -> f32 {
    if n <= 1 {
        return -0.5;
    }
    -0.5 + i as f32 / (n - 1) as f32
}
