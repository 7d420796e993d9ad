//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, sampled textures, the
//! depth attachment, and pipeline boilerplate.

/// Bind group layout entries and the indexed-mesh pipeline.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Sampled textures and the depth attachment.
pub mod texture;
