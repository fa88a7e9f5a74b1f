/// Render pipeline for position-only geometry: the gears and the hands.
///
/// Combines the flat WGSL source with [`FlatVertex`]'s single-attribute
/// layout. The resulting `wgpu::RenderPipeline` is `Arc`-wrapped and cheaply
/// cloneable.
use std::sync::Arc;

use cogwork_core::FlatVertex;

use crate::pipeline::{build_pipeline, PipelineLayouts};

#[derive(Clone)]
pub struct FlatPipeline {
    pub inner: Arc<wgpu::RenderPipeline>,
}

impl FlatPipeline {
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        source: &str,
        layouts: &PipelineLayouts,
    ) -> Self {
        let pipeline = build_pipeline(
            device,
            "Flat Pipeline",
            source,
            FlatVertex::layout(),
            target_format,
            layouts,
        );
        Self {
            inner: Arc::new(pipeline),
        }
    }
}
