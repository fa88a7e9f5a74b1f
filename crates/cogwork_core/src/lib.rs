// cogwork_core: shared GPU context, timing and vertex types

// wgpu instance/adapter/device/queue bring-up
pub mod context;

// frame clock + clock-hand angle math
pub mod time;

// POD vertex types shared by the renderer and the asset loader
pub mod vertex;

pub use context::{ContextError, RenderContext};
pub use time::{hand_angles, HandAngles, Time, TimeClock};
pub use vertex::{FlatVertex, ModelVertex};

// re-export glam so downstream crates agree on the math version
pub use glam;
