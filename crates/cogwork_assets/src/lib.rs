//! Single-mesh glTF extraction for Cogwork.
//!
//! The loader handles exactly one case: mesh 0, primitive 0, with `POSITION`,
//! `NORMAL` and `TEXCOORD_0` attributes plus a `u16` index accessor, all
//! stored tightly packed at byte offset 0 of their buffers. That is the
//! layout the clock's model files are exported in. Anything else is rejected
//! with a structured [`ExtractError`] at the attribute-resolution boundary
//! instead of being read through a wrong-layout cast.
//!
//! Materials, animation, scene graphs and multi-primitive meshes are out of
//! scope; extra meshes/primitives in the document are ignored.

pub mod extract;

pub use extract::{extract_first_mesh, load_model, ExtractError, MeshData};
