pub mod flat;
pub mod layout;
pub mod model;

pub use flat::FlatPipeline;
pub use layout::PipelineLayouts;
pub use model::ModelPipeline;

/// WGSL source for both pipelines.
///
/// The default is the embedded shader pair; the app layer replaces either
/// entry with file contents when a shader directory is configured, so shader
/// locations are configuration rather than compiled-in path literals.
pub struct ShaderSet {
    pub flat: String,
    pub model: String,
}

impl Default for ShaderSet {
    fn default() -> Self {
        Self {
            flat: include_str!("../shaders/flat.wgsl").to_string(),
            model: include_str!("../shaders/model.wgsl").to_string(),
        }
    }
}

/// Shared pipeline assembly: compiles `source` and wires it to the common
/// bind-group layouts and a single vertex buffer layout.
///
/// No depth buffer and no culling — the clock is flat 2-D geometry drawn in
/// painter's order, and the hand triangles are authored in mixed winding.
pub(crate) fn build_pipeline(
    device: &wgpu::Device,
    label: &str,
    source: &str,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    target_format: wgpu::TextureFormat,
    layouts: &PipelineLayouts,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[&layouts.camera, &layouts.object],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
