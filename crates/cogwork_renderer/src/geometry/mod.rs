pub mod gear;
pub mod hands;
pub mod mesh;

pub use cogwork_core::{FlatVertex, ModelVertex};
pub use gear::{gear, GearError};
pub use hands::{hand, Hand};
pub use mesh::Mesh;
