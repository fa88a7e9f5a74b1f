/// `cogwork_renderer` — GPU rendering for the Cogwork clock.
///
/// # Module layout
///
/// | Module      | Responsibility                                        |
/// |-------------|-------------------------------------------------------|
/// | `resources` | Low-level buffer allocation helpers                   |
/// | `geometry`  | Vertex types, gear generator, hand triangles, `Mesh`  |
/// | `camera`    | Fixed orthographic camera uniform + bind group        |
/// | `pipeline`  | Bind-group layouts + flat / model render pipelines    |
/// | `scene`     | `Drawable`, the clock `Scene`, per-frame transforms   |
pub mod camera;
pub mod geometry;
pub mod pipeline;
pub mod resources;
pub mod scene;

// ── Public re-exports ────────────────────────────────────────────────────────

pub use camera::ClockCamera;
pub use cogwork_core::{glam, FlatVertex, ModelVertex, RenderContext};
pub use geometry::{gear, hand, GearError, Hand, Mesh};
pub use pipeline::{PipelineLayouts, ShaderSet};
pub use scene::{Drawable, Scene};

use pipeline::{FlatPipeline, ModelPipeline};

/// Top-level renderer: GPU context, the two pipelines and the camera.
///
/// All state needed by a draw call is threaded through explicitly — the
/// device and queue come from [`RenderContext`], drawables carry their own
/// bind groups. Nothing relies on an implicitly bound context.
pub struct Renderer {
    pub context: RenderContext,
    pub camera: ClockCamera,
    layouts: PipelineLayouts,
    flat_pipeline: FlatPipeline,
    model_pipeline: ModelPipeline,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// Compiles the shader set and builds both pipelines for `format`.
    pub fn new(context: RenderContext, format: wgpu::TextureFormat, shaders: &ShaderSet) -> Self {
        let device = &context.device;

        let layouts = PipelineLayouts::new(device);
        let flat_pipeline = FlatPipeline::new(device, format, &shaders.flat, &layouts);
        let model_pipeline = ModelPipeline::new(device, format, &shaders.model, &layouts);
        let camera = ClockCamera::new(device, &layouts.camera);
        log::debug!("pipelines compiled for {format:?}");

        Self {
            context,
            camera,
            layouts,
            flat_pipeline,
            model_pipeline,
            // teal background, as on the original clock face
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
        }
    }

    /// Shared bind-group layouts, needed when constructing [`Drawable`]s.
    pub fn layouts(&self) -> &PipelineLayouts {
        &self.layouts
    }

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Records one full frame into `view`: clear, optional loaded model,
    /// then gears and hands in painter's order.
    pub fn render_to_view(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        scene: &Scene,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Clock Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_bind_group(0, &*self.camera.bind_group, &[]);

        // Loaded model sits behind the clock face, if one was configured.
        if let Some(model) = &scene.model {
            rpass.set_pipeline(&self.model_pipeline.inner);
            rpass.set_bind_group(1, &*model.bind_group, &[]);
            model.mesh.draw(&mut rpass);
        }

        rpass.set_pipeline(&self.flat_pipeline.inner);
        for drawable in scene.flat_drawables() {
            rpass.set_bind_group(1, &*drawable.bind_group, &[]);
            drawable.mesh.draw(&mut rpass);
        }
    }
}
