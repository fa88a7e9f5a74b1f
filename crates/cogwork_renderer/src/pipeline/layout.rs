/// Shared `wgpu::BindGroupLayout` objects used by both render pipelines.
/// Centralising them here means the flat and model pipelines agree on the
/// camera/object group shapes without re-creating them.
use std::sync::Arc;

/// Bind-group layouts for the two uniform groups every Cogwork shader uses.
///
/// Layouts are created once and shared via `Arc` so drawables can hold a
/// reference without owning the whole struct.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) — camera view + projection matrices (one `UNIFORM` buffer at
    /// binding 0), shared by every draw call.
    pub camera: Arc<wgpu::BindGroupLayout>,
    /// group(1) — per-object model matrix + color.
    pub object: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = |binding: u32, visibility| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let camera = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Camera"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            }),
        );

        // The fragment stage reads the object color, so the object uniform is
        // visible to both stages.
        let object = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Object"),
                entries: &[uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            }),
        );

        Self { camera, object }
    }
}
