//! Shared utilities for the viewer.

/// Session clock, frame pacing and FPS smoothing.
pub mod frame_timing;
