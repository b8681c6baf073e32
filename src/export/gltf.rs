//! glTF/GLB export.

use std::mem;
use std::path::Path;

use gltf_json as json;
use json::validation::Checked::Valid;
use json::validation::USize64;

use crate::error::{MesherError, Result};
use crate::mesher::MesherOutput;

/// Export a mesh to GLB format (binary glTF).
///
/// The container holds a single mesh with one primitive exposing POSITION
/// and COLOR_0 attributes, a u32 index buffer and a vertex-colored material.
/// Vertices are written exactly as triangulated; no consolidation pass runs,
/// so vertex order and triangle indices are stable for downstream consumers.
///
/// A mesh without triangles (degenerate lattice) is exported as a POINTS
/// primitive instead of failing.
pub fn export_glb(output: &MesherOutput) -> Result<Vec<u8>> {
    let mesh = &output.mesh;
    if mesh.is_empty() {
        return Err(MesherError::Export("cannot export empty mesh".to_string()));
    }

    let positions = mesh.positions_flat();
    let colors = mesh.colors_flat();

    // Build the binary buffer: positions, colors, then indices.
    let mut buffer_data: Vec<u8> = Vec::new();
    let pos_offset = buffer_data.len();
    buffer_data.extend_from_slice(cast_slice_to_bytes(&positions));
    let color_offset = buffer_data.len();
    buffer_data.extend_from_slice(cast_slice_to_bytes(&colors));
    let idx_offset = buffer_data.len();
    buffer_data.extend_from_slice(cast_slice_to_bytes(&mesh.indices));
    let total_buffer_size = buffer_data.len();

    let mut buffer_views = vec![
        create_buffer_view(
            pos_offset,
            color_offset - pos_offset,
            Some(json::buffer::Target::ArrayBuffer),
        ),
        create_buffer_view(
            color_offset,
            idx_offset - color_offset,
            Some(json::buffer::Target::ArrayBuffer),
        ),
    ];

    let mut accessors = vec![
        create_accessor(
            0,
            mesh.vertex_count(),
            json::accessor::Type::Vec3,
            json::accessor::ComponentType::F32,
            Some(output.bounds.min.to_array()),
            Some(output.bounds.max.to_array()),
        ),
        create_accessor(
            1,
            mesh.vertex_count(),
            json::accessor::Type::Vec4,
            json::accessor::ComponentType::F32,
            None,
            None,
        ),
    ];

    // Zero-length buffer views are not representable, so the index accessor
    // only exists when there are triangles to point at.
    let indices_accessor = if mesh.indices.is_empty() {
        None
    } else {
        buffer_views.push(create_buffer_view(
            idx_offset,
            total_buffer_size - idx_offset,
            Some(json::buffer::Target::ElementArrayBuffer),
        ));
        accessors.push(create_accessor(
            2,
            mesh.indices.len(),
            json::accessor::Type::Scalar,
            json::accessor::ComponentType::U32,
            None,
            None,
        ));
        Some(json::Index::new(2))
    };

    let primitive = create_primitive(0, 1, indices_accessor, 0);

    // Build glTF JSON
    let root = json::Root {
        accessors,
        buffers: vec![json::Buffer {
            byte_length: USize64(total_buffer_size as u64),
            extensions: Default::default(),
            extras: Default::default(),
            uri: None,
        }],
        buffer_views,
        materials: vec![create_vertex_color_material()],
        meshes: vec![json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            primitives: vec![primitive],
            weights: None,
        }],
        nodes: vec![json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(json::Index::new(0)),
            rotation: None,
            scale: None,
            translation: None,
            skin: None,
            weights: None,
        }],
        scenes: vec![json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            nodes: vec![json::Index::new(0)],
        }],
        scene: Some(json::Index::new(0)),
        ..Default::default()
    };

    // Serialize JSON
    let json_string = json::serialize::to_string(&root)?;
    let json_bytes = json_string.as_bytes();

    // Pad JSON to 4-byte alignment
    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let padded_json_len = json_bytes.len() + json_padding;

    // Pad buffer to 4-byte alignment
    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let padded_buffer_len = buffer_data.len() + buffer_padding;

    let total_size = 12 + // GLB header
        8 + padded_json_len + // JSON chunk
        8 + padded_buffer_len; // BIN chunk

    let mut glb = Vec::with_capacity(total_size);

    // GLB Header
    glb.extend_from_slice(b"glTF"); // magic
    glb.extend_from_slice(&2u32.to_le_bytes()); // version
    glb.extend_from_slice(&(total_size as u32).to_le_bytes()); // length

    // JSON Chunk
    glb.extend_from_slice(&(padded_json_len as u32).to_le_bytes()); // chunk length
    glb.extend_from_slice(&0x4E4F534Au32.to_le_bytes()); // chunk type: JSON
    glb.extend_from_slice(json_bytes);
    glb.extend_from_slice(&vec![0x20u8; json_padding]); // padding (spaces)

    // BIN Chunk
    glb.extend_from_slice(&(padded_buffer_len as u32).to_le_bytes()); // chunk length
    glb.extend_from_slice(&0x004E4942u32.to_le_bytes()); // chunk type: BIN
    glb.extend_from_slice(&buffer_data);
    glb.extend_from_slice(&vec![0u8; buffer_padding]); // padding (zeros)

    Ok(glb)
}

/// Export a GLB and write it to `path`, creating parent directories as
/// needed.
pub fn write_glb<P: AsRef<Path>>(output: &MesherOutput, path: P) -> Result<()> {
    let glb = export_glb(output)?;
    super::write_file(path.as_ref(), &glb)
}

/// Create a buffer view.
fn create_buffer_view(
    offset: usize,
    size: usize,
    target: Option<json::buffer::Target>,
) -> json::buffer::View {
    json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: USize64(size as u64),
        byte_offset: Some(USize64(offset as u64)),
        byte_stride: None,
        extensions: Default::default(),
        extras: Default::default(),
        target: target.map(Valid),
    }
}

/// Create an accessor.
fn create_accessor(
    buffer_view: u32,
    count: usize,
    type_: json::accessor::Type,
    component_type: json::accessor::ComponentType,
    min: Option<[f32; 3]>,
    max: Option<[f32; 3]>,
) -> json::Accessor {
    json::Accessor {
        buffer_view: Some(json::Index::new(buffer_view)),
        byte_offset: Some(USize64(0)),
        count: USize64(count as u64),
        component_type: Valid(json::accessor::GenericComponentType(component_type)),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(type_),
        min: min.map(|m| json::Value::from(m.to_vec())),
        max: max.map(|m| json::Value::from(m.to_vec())),
        normalized: false,
        sparse: None,
    }
}

/// Create the mesh primitive. Indexed meshes render as triangles; an
/// unindexed (degenerate) lattice renders as points.
fn create_primitive(
    positions_accessor: u32,
    colors_accessor: u32,
    indices: Option<json::Index<json::Accessor>>,
    material: u32,
) -> json::mesh::Primitive {
    let mut attributes = std::collections::BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        json::Index::new(positions_accessor),
    );
    attributes.insert(
        Valid(json::mesh::Semantic::Colors(0)),
        json::Index::new(colors_accessor),
    );

    let mode = if indices.is_some() {
        json::mesh::Mode::Triangles
    } else {
        json::mesh::Mode::Points
    };

    json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices,
        material: Some(json::Index::new(material)),
        mode: Valid(mode),
        targets: None,
    }
}

/// Create the vertex-colored material: untextured, fully rough, double
/// sided so the relief reads from below as well.
fn create_vertex_color_material() -> json::Material {
    json::Material {
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_texture: None,
            base_color_factor: json::material::PbrBaseColorFactor([1.0, 1.0, 1.0, 1.0]),
            metallic_factor: json::material::StrengthFactor(0.0),
            roughness_factor: json::material::StrengthFactor(1.0),
            metallic_roughness_texture: None,
            extensions: Default::default(),
            extras: Default::default(),
        },
        alpha_mode: Valid(json::material::AlphaMode::Opaque),
        alpha_cutoff: None,
        double_sided: true,
        normal_texture: None,
        occlusion_texture: None,
        emissive_texture: None,
        emissive_factor: json::material::EmissiveFactor([0.0, 0.0, 0.0]),
        extensions: Default::default(),
        extras: Default::default(),
    }
}

/// Cast a slice of T to a slice of bytes.
fn cast_slice_to_bytes<T: Copy>(slice: &[T]) -> &[u8] {
    let ptr = slice.as_ptr() as *const u8;
    let len = slice.len() * mem::size_of::<T>();
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesher::{Mesher, MesherConfig};
    use crate::types::IntensityGrid;

    fn mesh_uniform(width: u32, height: u32) -> MesherOutput {
        let source = IntensityGrid::new(4, 4, vec![128; 16]);
        let config = MesherConfig {
            width,
            height,
            z_scale: 0.1,
            invert: false,
            blur: 0,
        };
        Mesher::with_config(config).mesh(&source).unwrap()
    }

    fn json_chunk(glb: &[u8]) -> serde_json::Value {
        let json_len = u32::from_le_bytes([glb[12], glb[13], glb[14], glb[15]]) as usize;
        serde_json::from_slice(&glb[20..20 + json_len]).unwrap()
    }

    #[test]
    fn test_export_header_and_version() {
        let glb = export_glb(&mesh_uniform(4, 4)).unwrap();

        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(u32::from_le_bytes([glb[4], glb[5], glb[6], glb[7]]), 2); // version
        assert_eq!(
            u32::from_le_bytes([glb[8], glb[9], glb[10], glb[11]]) as usize,
            glb.len()
        );
    }

    #[test]
    fn test_export_exposes_color_attribute() {
        let glb = export_glb(&mesh_uniform(3, 3)).unwrap();
        let root = json_chunk(&glb);

        let primitive = &root["meshes"][0]["primitives"][0];
        assert!(primitive["attributes"]["POSITION"].is_u64());
        assert!(primitive["attributes"]["COLOR_0"].is_u64());
        assert!(primitive["indices"].is_u64());
    }

    #[test]
    fn test_export_counts_match_lattice() {
        let glb = export_glb(&mesh_uniform(4, 4)).unwrap();
        let root = json_chunk(&glb);

        assert_eq!(root["accessors"][0]["count"], 16); // positions
        assert_eq!(root["accessors"][1]["count"], 16); // colors
        assert_eq!(root["accessors"][2]["count"], 18 * 3); // indices
    }

    #[test]
    fn test_degenerate_mesh_exports_points() {
        let glb = export_glb(&mesh_uniform(4, 1)).unwrap();
        let root = json_chunk(&glb);

        let primitive = &root["meshes"][0]["primitives"][0];
        assert_eq!(primitive["mode"], 0); // POINTS
        assert!(primitive.get("indices").is_none());
    }

    #[test]
    fn test_export_empty_mesh_fails() {
        let output = MesherOutput {
            mesh: crate::mesher::Mesh::new(),
            bounds: crate::types::BoundingBox::new(glam::Vec3::ZERO, glam::Vec3::ZERO),
            width: 0,
            height: 0,
        };

        assert!(export_glb(&output).is_err());
    }

    #[test]
    fn test_export_is_deterministic() {
        let a = export_glb(&mesh_uniform(8, 8)).unwrap();
        let b = export_glb(&mesh_uniform(8, 8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_glb_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/outputs/model.glb");

        write_glb(&mesh_uniform(2, 2), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[0..4], b"glTF");
    }
}
