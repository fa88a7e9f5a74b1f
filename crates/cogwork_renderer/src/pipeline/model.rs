/// Render pipeline for extracted model meshes.
///
/// Uses [`ModelVertex`]'s interleaved position/normal/texcoord layout at
/// attribute locations 0/1/2. Texcoords reach the shader but nothing samples
/// them — there is no material system, so the fragment stage shades with the
/// per-object color and a fixed light.
use std::sync::Arc;

use cogwork_core::ModelVertex;

use crate::pipeline::{build_pipeline, PipelineLayouts};

#[derive(Clone)]
pub struct ModelPipeline {
    pub inner: Arc<wgpu::RenderPipeline>,
}

impl ModelPipeline {
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        source: &str,
        layouts: &PipelineLayouts,
    ) -> Self {
        let pipeline = build_pipeline(
            device,
            "Model Pipeline",
            source,
            ModelVertex::layout(),
            target_format,
            layouts,
        );
        Self {
            inner: Arc::new(pipeline),
        }
    }
}
