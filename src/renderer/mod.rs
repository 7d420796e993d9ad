//! Rendering for the room scene.
//!
//! A single forward pass draws every scene object with depth testing and
//! alpha blending into the window surface.

/// Scene meshes, per-object uniforms and the forward pass.
pub mod scene_renderer;

pub use scene_renderer::{ObjectUniform, SceneRenderer};
