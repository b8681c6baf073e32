//! Wavefront OBJ export.
//!
//! OBJ is a simple, widely-supported text-based 3D format. Vertex colors
//! ride on the `v x y z r g b` extension understood by most mesh viewers.

use std::fmt::Write;
use std::path::Path;

use crate::error::{MesherError, Result};
use crate::mesher::MesherOutput;

/// Export a mesh to OBJ format. Returns the file content as a string.
pub fn export_obj(output: &MesherOutput, name: &str) -> Result<String> {
    let mesh = &output.mesh;
    if mesh.is_empty() {
        return Err(MesherError::Export("cannot export empty mesh".to_string()));
    }

    // Pre-size: ~60 bytes per vertex line + ~20 per face line
    let obj_capacity = 256 + mesh.vertex_count() * 60 + mesh.triangle_count() * 20;
    let mut obj = String::with_capacity(obj_capacity);

    // OBJ header
    writeln!(obj, "# Heightmap Mesher OBJ Export").unwrap();
    writeln!(obj, "# Vertices: {}", mesh.vertex_count()).unwrap();
    writeln!(obj, "# Triangles: {}", mesh.triangle_count()).unwrap();
    writeln!(obj).unwrap();

    writeln!(obj, "o {}", name).unwrap();
    writeln!(obj).unwrap();

    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        let [r, g, b, _] = vertex.color;
        writeln!(obj, "v {} {} {} {} {} {}", x, y, z, r, g, b).unwrap();
    }
    writeln!(obj).unwrap();

    // OBJ indices are 1-based
    for tri in mesh.indices.chunks_exact(3) {
        writeln!(obj, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1).unwrap();
    }

    Ok(obj)
}

/// Export an OBJ and write it to `path`, creating parent directories as
/// needed. The object name is taken from the file stem.
pub fn write_obj<P: AsRef<Path>>(output: &MesherOutput, path: P) -> Result<()> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("heightmap");

    let obj = export_obj(output, name)?;
    super::write_file(path, obj.as_bytes())
}
