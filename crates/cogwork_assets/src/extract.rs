use std::path::Path;

use gltf::accessor::{DataType, Dimensions};
use gltf::Semantic;
use thiserror::Error;

use cogwork_core::ModelVertex;

/// CPU-side result of extracting the first mesh of a document: interleaved
/// vertices plus `u16` indices, ready for a one-shot GPU upload.
///
/// There is no material here — texture loading is out of scope, and callers
/// must treat the mesh as "no material", not as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u16>,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("glTF import failed: {0}")]
    Import(#[from] gltf::Error),
    #[error("document contains no mesh with a primitive")]
    EmptyDocument,
    #[error("first primitive is missing the {0} attribute")]
    MissingAttribute(&'static str),
    #[error("first primitive has no index accessor")]
    MissingIndices,
    #[error("index accessor is not an unsigned 16-bit scalar")]
    UnsupportedIndexType,
    #[error("malformed {semantic} layout: {reason}")]
    MalformedAttributeLayout {
        semantic: &'static str,
        reason: &'static str,
    },
}

/// Imports `path` and extracts its first mesh.
pub fn load_model(path: &Path) -> Result<MeshData, ExtractError> {
    let (document, buffers, _images) = gltf::import(path)?;
    extract_first_mesh(&document, &buffers)
}

/// Extracts mesh 0 / primitive 0 of an already-parsed document.
///
/// The vertex pull is sized by the **index accessor's** count and attributes
/// are read by sequential vertex index, not through the index values — the
/// layout the clock's model exporter produces stores attributes in draw
/// order, with the index buffer counting 0,1,2,… in lockstep. Attribute
/// accessors shorter than the index count are rejected rather than read out
/// of bounds.
pub fn extract_first_mesh(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshData, ExtractError> {
    let mesh = document.meshes().next().ok_or(ExtractError::EmptyDocument)?;
    let primitive = mesh
        .primitives()
        .next()
        .ok_or(ExtractError::EmptyDocument)?;

    let extra_meshes = document.meshes().count() - 1;
    let extra_primitives = mesh.primitives().count() - 1;
    if extra_meshes > 0 || extra_primitives > 0 {
        log::debug!(
            "ignoring {extra_meshes} extra mesh(es) and {extra_primitives} extra primitive(s)"
        );
    }

    // Indices first: their count decides how many vertices we pull.
    let index_accessor = primitive.indices().ok_or(ExtractError::MissingIndices)?;
    if index_accessor.data_type() != DataType::U16
        || index_accessor.dimensions() != Dimensions::Scalar
    {
        return Err(ExtractError::UnsupportedIndexType);
    }
    let vertex_count = index_accessor.count();

    let index_bytes = checked_bytes("indices", &index_accessor, buffers, 2, vertex_count)?;
    let indices: Vec<u16> = index_bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    let positions = attribute_floats(
        &primitive,
        buffers,
        Semantic::Positions,
        "POSITION",
        Dimensions::Vec3,
        vertex_count,
    )?;
    let normals = attribute_floats(
        &primitive,
        buffers,
        Semantic::Normals,
        "NORMAL",
        Dimensions::Vec3,
        vertex_count,
    )?;
    let texcoords = attribute_floats(
        &primitive,
        buffers,
        Semantic::TexCoords(0),
        "TEXCOORD_0",
        Dimensions::Vec2,
        vertex_count,
    )?;

    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..vertex_count {
        vertices.push(ModelVertex {
            position: [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]],
            normal: [normals[i * 3], normals[i * 3 + 1], normals[i * 3 + 2]],
            texcoord: [texcoords[i * 2], texcoords[i * 2 + 1]],
        });
    }

    log::debug!(
        "extracted mesh 0/primitive 0: {} vertices, {} indices",
        vertices.len(),
        indices.len()
    );

    Ok(MeshData { vertices, indices })
}

/// Resolves one named attribute to a `Vec<f32>` of `needed * dims` values,
/// validating the accessor → bufferView → buffer chain along the way.
fn attribute_floats(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    semantic: Semantic,
    name: &'static str,
    dimensions: Dimensions,
    needed: usize,
) -> Result<Vec<f32>, ExtractError> {
    let accessor = primitive
        .get(&semantic)
        .ok_or(ExtractError::MissingAttribute(name))?;

    if accessor.data_type() != DataType::F32 || accessor.dimensions() != dimensions {
        return Err(ExtractError::MalformedAttributeLayout {
            semantic: name,
            reason: "component type is not f32 with the expected dimensions",
        });
    }

    let dims = dimensions.multiplicity();
    let bytes = checked_bytes(name, &accessor, buffers, dims * 4, needed)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Returns the first `needed * elem_size` bytes backing `accessor`, or an
/// error describing which layout assumption the document violates.
///
/// The supported layout is the one the original loader silently assumed:
/// data starting at byte offset 0 of both accessor and buffer view, tightly
/// packed, dense. Here each assumption is checked before any slicing.
fn checked_bytes<'a>(
    semantic: &'static str,
    accessor: &gltf::Accessor,
    buffers: &'a [gltf::buffer::Data],
    elem_size: usize,
    needed: usize,
) -> Result<&'a [u8], ExtractError> {
    let malformed = |reason: &'static str| ExtractError::MalformedAttributeLayout {
        semantic,
        reason,
    };

    if accessor.sparse().is_some() {
        return Err(malformed("sparse accessors are not supported"));
    }
    if accessor.offset() != 0 {
        return Err(malformed("accessor byte offset is nonzero"));
    }
    if accessor.count() < needed {
        return Err(malformed("fewer elements than the index count"));
    }

    let view = accessor
        .view()
        .ok_or_else(|| malformed("accessor has no buffer view"))?;
    if view.offset() != 0 {
        return Err(malformed("buffer view byte offset is nonzero"));
    }
    if view.stride().is_some_and(|s| s != elem_size) {
        return Err(malformed("buffer view is not tightly packed"));
    }

    let byte_len = needed * elem_size;
    if view.length() < byte_len {
        return Err(malformed("buffer view is too short"));
    }
    let data = buffers
        .get(view.buffer().index())
        .ok_or_else(|| malformed("buffer data is missing"))?;
    if data.0.len() < byte_len {
        return Err(malformed("buffer is too short"));
    }

    Ok(&data.0[..byte_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fixture helpers ───────────────────────────────────────────────────
    // Documents are assembled by hand as .gltf JSON with base64 data-URI
    // buffers, one buffer per attribute so every accessor sits at offset 0.

    fn data_uri(bytes: &[u8]) -> String {
        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        format!("data:application/octet-stream;base64,{encoded}")
    }

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn u16_bytes(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    const POSITIONS: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    const NORMALS: [f32; 9] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    const TEXCOORDS: [f32; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

    /// One triangle, sequential indices, every accessor at offset 0.
    fn triangle_json() -> String {
        let pos = f32_bytes(&POSITIONS);
        let nrm = f32_bytes(&NORMALS);
        let uv = f32_bytes(&TEXCOORDS);
        let idx = u16_bytes(&[0, 1, 2]);
        format!(
            r#"{{
  "asset": {{ "version": "2.0" }},
  "buffers": [
    {{ "uri": "{}", "byteLength": 36 }},
    {{ "uri": "{}", "byteLength": 36 }},
    {{ "uri": "{}", "byteLength": 24 }},
    {{ "uri": "{}", "byteLength": 6 }}
  ],
  "bufferViews": [
    {{ "buffer": 0, "byteLength": 36 }},
    {{ "buffer": 1, "byteLength": 36 }},
    {{ "buffer": 2, "byteLength": 24 }},
    {{ "buffer": 3, "byteLength": 6 }}
  ],
  "accessors": [
    {{ "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
       "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }},
    {{ "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3" }},
    {{ "bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC2" }},
    {{ "bufferView": 3, "componentType": 5123, "count": 3, "type": "SCALAR" }}
  ],
  "meshes": [ {{ "primitives": [ {{
    "attributes": {{ "POSITION": 0, "NORMAL": 1, "TEXCOORD_0": 2 }},
    "indices": 3
  }} ] }} ]
}}"#,
            data_uri(&pos),
            data_uri(&nrm),
            data_uri(&uv),
            data_uri(&idx),
        )
    }

    fn extract(json: &str) -> Result<MeshData, ExtractError> {
        let (document, buffers, _) = gltf::import_slice(json.as_bytes())?;
        extract_first_mesh(&document, &buffers)
    }

    #[test]
    fn round_trip_matches_input() {
        let mesh = extract(&triangle_json()).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices.len(), 3);
        for i in 0..3 {
            assert_eq!(
                mesh.vertices[i].position,
                [POSITIONS[i * 3], POSITIONS[i * 3 + 1], POSITIONS[i * 3 + 2]]
            );
            assert_eq!(
                mesh.vertices[i].normal,
                [NORMALS[i * 3], NORMALS[i * 3 + 1], NORMALS[i * 3 + 2]]
            );
            assert_eq!(
                mesh.vertices[i].texcoord,
                [TEXCOORDS[i * 2], TEXCOORDS[i * 2 + 1]]
            );
        }
    }

    #[test]
    fn missing_normal_is_reported() {
        let json = triangle_json().replace(r#""NORMAL": 1, "#, "");
        match extract(&json) {
            Err(ExtractError::MissingAttribute("NORMAL")) => {}
            other => panic!("expected MissingAttribute(NORMAL), got {other:?}"),
        }
    }

    #[test]
    fn missing_texcoord_is_reported() {
        let json = triangle_json().replace(r#", "TEXCOORD_0": 2"#, "");
        match extract(&json) {
            Err(ExtractError::MissingAttribute("TEXCOORD_0")) => {}
            other => panic!("expected MissingAttribute(TEXCOORD_0), got {other:?}"),
        }
    }

    #[test]
    fn nonzero_view_offset_is_rejected() {
        // Pad the position buffer by 4 bytes and point the view past the pad.
        let mut pos = vec![0u8; 4];
        pos.extend(f32_bytes(&POSITIONS));
        let json = triangle_json()
            .replace(
                &format!(r#""uri": "{}", "byteLength": 36"#, data_uri(&f32_bytes(&POSITIONS))),
                &format!(r#""uri": "{}", "byteLength": 40"#, data_uri(&pos)),
            )
            .replace(
                r#"{ "buffer": 0, "byteLength": 36 }"#,
                r#"{ "buffer": 0, "byteOffset": 4, "byteLength": 36 }"#,
            );
        match extract(&json) {
            Err(ExtractError::MalformedAttributeLayout {
                semantic: "POSITION",
                ..
            }) => {}
            other => panic!("expected MalformedAttributeLayout, got {other:?}"),
        }
    }

    #[test]
    fn nonzero_accessor_offset_is_rejected() {
        // Same 4-byte pad, but skipped by the accessor instead of the view.
        let mut pos = vec![0u8; 4];
        pos.extend(f32_bytes(&POSITIONS));
        let json = triangle_json()
            .replace(
                &format!(r#""uri": "{}", "byteLength": 36"#, data_uri(&f32_bytes(&POSITIONS))),
                &format!(r#""uri": "{}", "byteLength": 40"#, data_uri(&pos)),
            )
            .replace(
                r#"{ "buffer": 0, "byteLength": 36 }"#,
                r#"{ "buffer": 0, "byteLength": 40 }"#,
            )
            .replace(
                r#""bufferView": 0, "componentType": 5126"#,
                r#""bufferView": 0, "byteOffset": 4, "componentType": 5126"#,
            );
        match extract(&json) {
            Err(ExtractError::MalformedAttributeLayout {
                semantic: "POSITION",
                reason,
            }) => assert!(reason.contains("accessor byte offset")),
            other => panic!("expected MalformedAttributeLayout, got {other:?}"),
        }
    }

    #[test]
    fn u32_indices_are_rejected() {
        let idx: Vec<u8> = [0u32, 1, 2].iter().flat_map(|v| v.to_le_bytes()).collect();
        let json = triangle_json()
            .replace(
                &format!(r#""uri": "{}", "byteLength": 6"#, data_uri(&u16_bytes(&[0, 1, 2]))),
                &format!(r#""uri": "{}", "byteLength": 12"#, data_uri(&idx)),
            )
            .replace(
                r#"{ "buffer": 3, "byteLength": 6 }"#,
                r#"{ "buffer": 3, "byteLength": 12 }"#,
            )
            .replace(
                r#""componentType": 5123, "count": 3, "type": "SCALAR""#,
                r#""componentType": 5125, "count": 3, "type": "SCALAR""#,
            );
        match extract(&json) {
            Err(ExtractError::UnsupportedIndexType) => {}
            other => panic!("expected UnsupportedIndexType, got {other:?}"),
        }
    }

    #[test]
    fn short_attribute_is_rejected() {
        // POSITION claims 2 elements while the index accessor has 3.
        let json = triangle_json().replace(
            r#""componentType": 5126, "count": 3, "type": "VEC3",
       "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }"#,
            r#""componentType": 5126, "count": 2, "type": "VEC3",
       "min": [0.0, 0.0, 0.0], "max": [1.0, 0.0, 0.0] }"#,
        );
        match extract(&json) {
            Err(ExtractError::MalformedAttributeLayout {
                semantic: "POSITION",
                reason,
            }) => assert!(reason.contains("fewer elements")),
            other => panic!("expected MalformedAttributeLayout, got {other:?}"),
        }
    }

    #[test]
    fn document_without_meshes_is_rejected() {
        let json = r#"{ "asset": { "version": "2.0" } }"#;
        match extract(json) {
            Err(ExtractError::EmptyDocument) => {}
            other => panic!("expected EmptyDocument, got {other:?}"),
        }
    }
}
