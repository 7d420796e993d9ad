// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Fly-through viewer for a small, fixed scene of textured primitives.
//!
//! Roomview loads a handful of textures, lays out planes, boxes, cylinders
//! and spheres as a static bathroom, and lets the user move a free camera
//! through it with mouse look, scroll zoom and WASD/QE movement.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - camera pose, zoom, projection mode, and
//!   the view/projection matrices derived from them
//! - [`input::InputProcessor`] - raw events to camera operations, plus the
//!   level-triggered per-frame key snapshot
//! - [`options::Options`] - TOML configuration (window, camera, key
//!   bindings, texture paths)
//! - [`scene::Scene`] - the fixed object list and primitive meshes
//! - [`engine::RoomEngine`] - ties the above to a wgpu renderer
//!
//! # Frame order
//!
//! Pointer and scroll events are applied to the camera as they arrive. On
//! each redraw the engine ticks the camera clock, applies the held keys,
//! then builds the camera uniform and draws the scene.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::RoomEngine;
pub use error::RoomviewError;
pub use input::InputEvent;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
