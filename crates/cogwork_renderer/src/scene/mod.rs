//! The clock scene: five flat drawables (two gears, three hands) plus an
//! optional loaded model, and the per-frame transform math that spins them.

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};

use cogwork_core::{hand_angles, FlatVertex};

use crate::geometry::{gear, hand, GearError, Hand, Mesh};
use crate::pipeline::PipelineLayouts;
use crate::resources::buffer;

// Face parameters carried over from the original clock: a large 20-tooth
// gear at the center and a smaller counter-rotating 15-tooth gear beside it.
const GEAR_LARGE: (f32, u32, f32) = (0.3, 20, 0.05);
const GEAR_SMALL: (f32, u32, f32) = (0.2, 15, 0.04);
const GEAR_SMALL_OFFSET: f32 = 0.6;

const COLOR_GEAR_LARGE: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);
const COLOR_GEAR_SMALL: Vec4 = Vec4::new(0.3, 0.3, 0.3, 1.0);
const COLOR_SECOND: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
const COLOR_MINUTE: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
const COLOR_HOUR: Vec4 = Vec4::new(0.2, 0.3, 1.0, 1.0);
const COLOR_MODEL: Vec4 = Vec4::new(0.8, 0.8, 0.8, 1.0);

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

/// A GPU-resident mesh instance: upload-once buffers, a model transform and
/// a color, bound at group(1).
///
/// Created once at startup; per-frame updates touch only the uniform buffer
/// through the queue. All GPU handles are `Arc`-wrapped and released when
/// the drawable drops.
pub struct Drawable {
    pub mesh: Mesh,
    pub bind_group: Arc<wgpu::BindGroup>,
    uniform: Arc<wgpu::Buffer>,
    matrix: Mat4,
    color: Vec4,
}

impl Drawable {
    pub fn new(
        device: &wgpu::Device,
        layouts: &PipelineLayouts,
        label: &str,
        mesh: Mesh,
        matrix: Mat4,
        color: Vec4,
    ) -> Self {
        let uniform = buffer::create_uniform(
            device,
            label,
            &ObjectUniform {
                model: matrix.to_cols_array_2d(),
                color: color.to_array(),
            },
        );
        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layouts.object,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        }));

        Self {
            mesh,
            bind_group,
            uniform,
            matrix,
            color,
        }
    }

    /// Updates the model matrix and pushes the uniform to the GPU.
    pub fn set_matrix(&mut self, queue: &wgpu::Queue, matrix: Mat4) {
        self.matrix = matrix;
        self.upload(queue);
    }

    /// Updates the color and pushes the uniform to the GPU.
    pub fn set_color(&mut self, queue: &wgpu::Queue, color: Vec4) {
        self.color = color;
        self.upload(queue);
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    fn upload(&self, queue: &wgpu::Queue) {
        buffer::update_uniform(
            queue,
            &self.uniform,
            &ObjectUniform {
                model: self.matrix.to_cols_array_2d(),
                color: self.color.to_array(),
            },
        );
    }
}

/// Model matrices for one frame of the clock, at `elapsed` seconds.
///
/// Everything rotates about the -Z axis, clockwise as seen on screen: the
/// hands at 1, 1/60 and 1/3600 radians per second, the large gear with the
/// second hand, the small gear twice as fast the other way and displaced
/// along +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTransforms {
    pub gear_large: Mat4,
    pub gear_small: Mat4,
    pub second: Mat4,
    pub minute: Mat4,
    pub hour: Mat4,
}

pub fn clock_transforms(elapsed: f64) -> ClockTransforms {
    let angles = hand_angles(elapsed);
    let spin = |angle: f32| Mat4::from_rotation_z(-angle);

    ClockTransforms {
        gear_large: spin(angles.second),
        gear_small: Mat4::from_translation(Vec3::new(GEAR_SMALL_OFFSET, 0.0, 0.0))
            * spin(-2.0 * angles.second),
        second: spin(angles.second),
        minute: spin(angles.minute),
        hour: spin(angles.hour),
    }
}

/// The complete clock scene.
pub struct Scene {
    pub gear_large: Drawable,
    pub gear_small: Drawable,
    pub second: Drawable,
    pub minute: Drawable,
    pub hour: Drawable,
    /// Extracted model mesh, when one was configured. Drawn with the model
    /// pipeline behind the clock face.
    pub model: Option<Drawable>,
}

impl Scene {
    /// Builds the gear and hand drawables. Fails only if the gear parameters
    /// are rejected, which for the built-in constants would be a programming
    /// error caught by the geometry tests.
    pub fn clock(device: &wgpu::Device, layouts: &PipelineLayouts) -> Result<Self, GearError> {
        let flat = |label, vertices: &[FlatVertex], color| {
            Drawable::new(
                device,
                layouts,
                label,
                Mesh::from_flat(device, label, vertices),
                Mat4::IDENTITY,
                color,
            )
        };

        let (r, teeth, depth) = GEAR_LARGE;
        let gear_large = flat("Gear Large", &gear(r, teeth, depth)?, COLOR_GEAR_LARGE);
        let (r, teeth, depth) = GEAR_SMALL;
        let gear_small = flat("Gear Small", &gear(r, teeth, depth)?, COLOR_GEAR_SMALL);

        Ok(Self {
            gear_large,
            gear_small,
            second: flat("Second Hand", hand(Hand::Second), COLOR_SECOND),
            minute: flat("Minute Hand", hand(Hand::Minute), COLOR_MINUTE),
            hour: flat("Hour Hand", hand(Hand::Hour), COLOR_HOUR),
            model: None,
        })
    }

    /// Attaches an extracted model mesh to the scene.
    pub fn set_model(&mut self, device: &wgpu::Device, layouts: &PipelineLayouts, mesh: Mesh) {
        self.model = Some(Drawable::new(
            device,
            layouts,
            "Loaded Model",
            mesh,
            Mat4::IDENTITY,
            COLOR_MODEL,
        ));
    }

    /// Advances all transforms to `elapsed` seconds and uploads them.
    pub fn update(&mut self, queue: &wgpu::Queue, elapsed: f64) {
        let t = clock_transforms(elapsed);
        self.gear_large.set_matrix(queue, t.gear_large);
        self.gear_small.set_matrix(queue, t.gear_small);
        self.second.set_matrix(queue, t.second);
        self.minute.set_matrix(queue, t.minute);
        self.hour.set_matrix(queue, t.hour);
    }

    /// The flat-pipeline drawables in draw order: gears first, then the
    /// hands with the hour hand on top.
    pub fn flat_drawables(&self) -> [&Drawable; 5] {
        [
            &self.gear_large,
            &self.gear_small,
            &self.second,
            &self.minute,
            &self.hour,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4Swizzles;

    #[test]
    fn hands_rotate_clockwise_at_their_ratios() {
        let t = clock_transforms(std::f64::consts::FRAC_PI_2);
        // after π/2 seconds the second hand tip points along +X
        let tip = t.second * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!((tip.x - 1.0).abs() < 1e-5);
        assert!(tip.y.abs() < 1e-5);

        // minute and hour hands follow at 1/60 and 1/3600 of the rate
        let m = clock_transforms(std::f64::consts::FRAC_PI_2 * 60.0).minute;
        let tip = m * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!((tip.x - 1.0).abs() < 1e-4);
        let h = clock_transforms(std::f64::consts::FRAC_PI_2 * 3600.0).hour;
        let tip = h * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!((tip.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn small_gear_is_offset_and_counter_rotating() {
        let t = clock_transforms(0.25);
        // the small gear's origin lands at its +X offset
        let origin = t.gear_small * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.xyz() - Vec3::new(GEAR_SMALL_OFFSET, 0.0, 0.0)).length() < 1e-6);

        // rotation components: large gear at -t, small at +2t about Z
        let large_angle = t.gear_large.col(0).y.atan2(t.gear_large.col(0).x);
        let small_rot = Mat4::from_translation(Vec3::new(-GEAR_SMALL_OFFSET, 0.0, 0.0))
            * t.gear_small;
        let small_angle = small_rot.col(0).y.atan2(small_rot.col(0).x);
        assert!((large_angle + 0.25).abs() < 1e-6);
        assert!((small_angle - 0.5).abs() < 1e-6);
    }

    #[test]
    fn transforms_start_at_identity() {
        let t = clock_transforms(0.0);
        assert_eq!(t.second, Mat4::IDENTITY);
        assert_eq!(t.minute, Mat4::IDENTITY);
        assert_eq!(t.hour, Mat4::IDENTITY);
        assert_eq!(t.gear_large, Mat4::IDENTITY);
    }
}
