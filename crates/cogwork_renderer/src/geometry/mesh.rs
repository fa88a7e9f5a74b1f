/// A drawable GPU mesh — a vertex buffer, an optional `u16` index buffer
/// and the counts needed to issue the draw call.
///
/// Meshes are cheaply cloneable because the underlying buffers are `Arc`-
/// wrapped; cloning never copies GPU memory. Buffers are uploaded once at
/// creation and never mutated, and the GPU allocation is released when the
/// last handle drops.
use std::sync::Arc;

use cogwork_assets::MeshData;
use cogwork_core::FlatVertex;

use crate::resources::buffer;

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Option<Arc<wgpu::Buffer>>,
    pub vertex_count: u32,
    pub index_count: u32,
    /// Index format used when binding this mesh. Always `Uint16` today; kept
    /// on the struct so the draw path never guesses.
    pub index_format: wgpu::IndexFormat,
}

impl Mesh {
    /// Uploads a position-only triangle list (gears, hands).
    pub fn from_flat(device: &wgpu::Device, label: &str, vertices: &[FlatVertex]) -> Self {
        Self {
            vertex_buffer: buffer::create_vertex(device, label, vertices),
            index_buffer: None,
            vertex_count: vertices.len() as u32,
            index_count: 0,
            index_format: wgpu::IndexFormat::Uint16,
        }
    }

    /// Uploads an extracted model mesh as interleaved vertices + indices.
    pub fn from_model(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        Self {
            vertex_buffer: buffer::create_vertex(device, label, &data.vertices),
            index_buffer: Some(buffer::create_index(device, label, &data.indices)),
            vertex_count: data.vertices.len() as u32,
            index_count: data.indices.len() as u32,
            index_format: wgpu::IndexFormat::Uint16,
        }
    }

    /// Binds the buffers and emits the draw call on `rpass`. The pipeline
    /// and bind groups must already be set.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                rpass.set_index_buffer(indices.slice(..), self.index_format);
                rpass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            None => rpass.draw(0..self.vertex_count, 0..1),
        }
    }
}
