/// Fixed orthographic camera for the clock face.
///
/// The view is a unit translation away from the origin along +Z looking
/// down -Z, and the projection maps the `[-1, 1]` square onto the target
/// regardless of aspect ratio. Both matrices are uploaded once at creation;
/// nothing about this camera changes at runtime.
use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::resources::buffer;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

pub struct ClockCamera {
    pub buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl ClockCamera {
    /// Allocates the camera uniform and its bind group. `layout` must have a
    /// single `UNIFORM` buffer entry at binding 0.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
        // wgpu clip space has z in [0, 1]; the scene sits at depth 1.
        let projection = Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);

        let uniform = CameraUniform {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        };
        let buf = buffer::create_uniform(device, "Camera Uniform Buffer", &uniform);

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buf.as_entire_binding(),
            }],
        }));

        Self {
            buffer: buf,
            bind_group,
        }
    }
}
