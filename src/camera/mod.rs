//! Camera system for walking through the scene.
//!
//! Provides a first-person camera with mouse look, scroll zoom, keyboard
//! movement and a perspective/orthographic projection toggle.

/// First-person controller: input handling and matrix generation.
pub mod controller;
/// Camera pose, projection mode, directions and the GPU uniform type.
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform, Direction, ProjectionMode};
