use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera pose, projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub position: [f32; 3],
    /// Initial viewing direction. Need not be normalized.
    pub front: [f32; 3],
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    /// Smallest allowed field of view in degrees.
    pub zoom_min: f32,
    /// Largest allowed field of view in degrees.
    pub zoom_max: f32,
    /// Pitch is kept within `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
    /// Degrees of yaw/pitch per pixel of pointer motion.
    pub sensitivity: f32,
    /// World units per second for keyboard movement.
    pub movement_speed: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half width/height of the orthographic view volume.
    pub ortho_half_extent: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 12.0],
            front: [0.0, -0.5, -2.0],
            zoom: 80.0,
            zoom_min: 1.0,
            zoom_max: 90.0,
            pitch_limit: 89.0,
            sensitivity: 0.1,
            movement_speed: 2.5,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_extent: 10.0,
        }
    }
}

impl CameraOptions {
    /// Return a copy whose bounds are usable by the camera controller.
    ///
    /// Non-finite values are replaced by their defaults. Inverted zoom
    /// bounds are swapped, the pitch limit is kept inside `(0, 89.9]`, and
    /// the initial zoom is clamped into its range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut opts = self.clone();
        for (value, fallback) in [
            (&mut opts.zoom, defaults.zoom),
            (&mut opts.zoom_min, defaults.zoom_min),
            (&mut opts.zoom_max, defaults.zoom_max),
            (&mut opts.pitch_limit, defaults.pitch_limit),
            (&mut opts.sensitivity, defaults.sensitivity),
            (&mut opts.movement_speed, defaults.movement_speed),
            (&mut opts.znear, defaults.znear),
            (&mut opts.zfar, defaults.zfar),
            (&mut opts.ortho_half_extent, defaults.ortho_half_extent),
        ] {
            if !value.is_finite() {
                *value = fallback;
            }
        }
        for (vector, fallback) in [
            (&mut opts.position, defaults.position),
            (&mut opts.front, defaults.front),
        ] {
            if !vector.iter().all(|c| c.is_finite()) {
                *vector = fallback;
            }
        }

        if opts.zoom_min > opts.zoom_max {
            std::mem::swap(&mut opts.zoom_min, &mut opts.zoom_max);
        }
        opts.zoom_min = opts.zoom_min.max(f32::EPSILON);
        opts.zoom_max = opts.zoom_max.max(opts.zoom_min);
        if opts.pitch_limit <= 0.0 {
            opts.pitch_limit = defaults.pitch_limit;
        }
        opts.pitch_limit = opts.pitch_limit.min(89.9);
        opts.zoom = opts.zoom.clamp(opts.zoom_min, opts.zoom_max);
        opts
    }
}
