use glam::{Mat4, Vec3};

/// Which projection the camera produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection using the camera zoom as vertical FOV.
    #[default]
    Perspective,
    /// Fixed-extent orthographic projection.
    Orthographic,
}

/// Discrete movement directions, relative to the camera basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along `up`.
    Up,
    /// Against `up`.
    Down,
}

impl Direction {
    /// Every direction, in the order held keys are applied.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// World up axis. Yaw and pitch are measured against it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Free-flying camera defined by eye position, yaw/pitch orientation and
/// zoom.
///
/// `front` and `up` are authoritative and `right` is derived from them.
/// All three are rebuilt together by [`Camera::update_vectors`], so they
/// stay orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit forward direction.
    pub front: Vec3,
    /// Unit up direction, perpendicular to `front`.
    pub up: Vec3,
    /// Unit right direction, `front × WORLD_UP`.
    pub right: Vec3,
    /// Heading in degrees (-90 looks down -Z).
    pub yaw: f32,
    /// Elevation in degrees.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Camera {
    /// Build a camera at `position` looking along `front`.
    ///
    /// Yaw and pitch are derived from the normalized `front`, with pitch
    /// limited to `±pitch_limit`. A zero `front` falls back to -Z.
    #[must_use]
    pub fn looking_along(
        position: Vec3,
        front: Vec3,
        zoom: f32,
        pitch_limit: f32,
    ) -> Self {
        let front = front.try_normalize().unwrap_or(Vec3::NEG_Z);
        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-pitch_limit, pitch_limit);

        let mut camera = Self {
            position,
            front,
            up: WORLD_UP,
            right: Vec3::X,
            yaw,
            pitch,
            zoom,
        };
        camera.update_vectors();
        camera
    }

    /// Recompute `front`, `right` and `up` from yaw and pitch.
    pub fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Right-handed look-at matrix from `position` toward
    /// `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view and projection matrices and the eye
/// position.
///
/// Matches the WGSL struct:
/// ```wgsl
/// struct Camera {
///     view: mat4x4<f32>,
///     projection: mat4x4<f32>,
///     view_position: vec3<f32>,
/// }
/// ```
pub struct CameraUniform {
    /// World-to-eye matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub view_position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Fill the uniform from a matrix pair and eye position.
    #[must_use]
    pub fn from_parts(view: Mat4, projection: Mat4, eye: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: eye.to_array(),
            _pad: 0.0,
        }
    }
}
