/// GPU vertex types shared by the renderer and the model loader.
///
/// Both structs are `#[repr(C)]` with contiguous `f32` fields so `bytemuck`
/// can reinterpret slices of them as bytes for a one-shot buffer upload.
/// The matching WGSL attribute locations are declared in the shaders under
/// `cogwork_renderer/src/shaders/`.

/// Position-only vertex used by the gear and hand meshes. z is always 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatVertex {
    /// Object-space position.
    pub position: [f32; 3],
}

impl FlatVertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    /// Returns the `VertexBufferLayout` that matches this struct's memory
    /// layout. Pass this to `wgpu::VertexState::buffers` when building a
    /// render pipeline.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }
}

/// Interleaved vertex produced by the model extractor.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal.
    pub normal: [f32; 3],
    /// Texture coordinate (unused until materials exist, but kept in the
    /// interleaved layout so the stride matches the shader).
    pub texcoord: [f32; 2],
}

impl ModelVertex {
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // @location(1) normal
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                },
                // @location(2) texcoord
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_vertex_stride_is_three_floats() {
        assert_eq!(std::mem::size_of::<FlatVertex>(), 12);
        assert_eq!(FlatVertex::layout().array_stride, 12);
    }

    #[test]
    fn model_vertex_stride_is_eight_floats() {
        assert_eq!(std::mem::size_of::<ModelVertex>(), 32);
        let layout = ModelVertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
    }
}
