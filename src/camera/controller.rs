use glam::{Mat4, Vec3};

use crate::camera::core::{Camera, CameraUniform, Direction, ProjectionMode};
use crate::input::FrameInput;
use crate::options::CameraOptions;

/// Transient pointer and frame-clock state.
#[derive(Debug, Clone, Default)]
struct InputTracking {
    /// Last pointer sample. `None` until the first sample arrives, which
    /// keeps an arbitrary starting cursor position from turning the view.
    last_cursor: Option<(f64, f64)>,
    /// Timestamp passed to the most recent frame tick, in seconds.
    last_frame_time: f32,
    /// Seconds between the two most recent frame ticks.
    delta_time: f32,
}

/// First-person camera controller: mouse look, scroll zoom, keyboard
/// movement and a perspective/orthographic toggle.
///
/// Call order per frame: pointer and scroll events whenever they arrive,
/// then [`on_frame_tick`](Self::on_frame_tick), then
/// [`apply_input`](Self::apply_input), then read the matrices.
pub struct CameraController {
    camera: Camera,
    projection_mode: ProjectionMode,
    tracking: InputTracking,

    sensitivity: f32,
    movement_speed: f32,
    zoom_min: f32,
    zoom_max: f32,
    pitch_limit: f32,
    znear: f32,
    zfar: f32,
    ortho_half_extent: f32,
}

impl CameraController {
    /// Create a controller from camera options. Out-of-range bounds in the
    /// options are repaired first (see [`CameraOptions::sanitized`]).
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let opts = options.sanitized();
        let camera = Camera::looking_along(
            Vec3::from_array(opts.position),
            Vec3::from_array(opts.front),
            opts.zoom,
            opts.pitch_limit,
        );

        Self {
            camera,
            projection_mode: ProjectionMode::default(),
            tracking: InputTracking::default(),
            sensitivity: opts.sensitivity,
            movement_speed: opts.movement_speed,
            zoom_min: opts.zoom_min,
            zoom_max: opts.zoom_max,
            pitch_limit: opts.pitch_limit,
            znear: opts.znear,
            zfar: opts.zfar,
            ortho_half_extent: opts.ortho_half_extent,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Seconds between the two most recent frame ticks.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.tracking.delta_time
    }

    /// Whether the next pointer sample will only be recorded.
    #[must_use]
    pub fn awaiting_first_sample(&self) -> bool {
        self.tracking.last_cursor.is_none()
    }

    /// Forget the last pointer sample so the next one cannot cause a jump.
    pub fn reset_pointer(&mut self) {
        self.tracking.last_cursor = None;
    }

    /// Handle an absolute pointer sample.
    ///
    /// The first sample is only recorded. Later samples turn the view by
    /// the pointer delta times the sensitivity, with screen-down mapped to
    /// pitch-down.
    pub fn on_pointer_moved(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.tracking.last_cursor.replace((x, y))
        else {
            return;
        };

        let offset_x = (x - last_x) as f32 * self.sensitivity;
        let offset_y = (last_y - y) as f32 * self.sensitivity;

        self.camera.yaw += offset_x;
        self.camera.pitch = (self.camera.pitch + offset_y)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.camera.update_vectors();
    }

    /// Handle a vertical scroll step. Scrolling up narrows the field of
    /// view.
    pub fn on_scroll(&mut self, delta_y: f64) {
        self.camera.zoom = (self.camera.zoom - delta_y as f32)
            .clamp(self.zoom_min, self.zoom_max);
    }

    /// Advance the frame clock to `current_time` seconds.
    pub fn on_frame_tick(&mut self, current_time: f32) {
        self.tracking.delta_time = current_time - self.tracking.last_frame_time;
        self.tracking.last_frame_time = current_time;
    }

    /// Move one frame's worth of distance in `direction`.
    pub fn process_direction(&mut self, direction: Direction) {
        let velocity = self.movement_speed * self.tracking.delta_time;
        let offset = match direction {
            Direction::Forward => self.camera.front,
            Direction::Backward => -self.camera.front,
            Direction::Left => -self.camera.right,
            Direction::Right => self.camera.right,
            Direction::Up => self.camera.up,
            Direction::Down => -self.camera.up,
        };
        self.camera.position += offset * velocity;
    }

    /// Switch projection mode. Setting the current mode again is a no-op.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if self.projection_mode != mode {
            log::debug!("projection mode: {mode:?}");
            self.projection_mode = mode;
        }
    }

    /// Apply one frame of held keys: movement first, then any projection
    /// request.
    pub fn apply_input(&mut self, input: &FrameInput) {
        for &direction in &input.directions {
            self.process_direction(direction);
        }
        if let Some(mode) = input.projection {
            self.set_projection_mode(mode);
        }
    }

    /// World-to-eye matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Eye-to-clip matrix for the current projection mode.
    ///
    /// Both projections use wgpu's `[0, 1]` depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.camera.zoom.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_extent;
                Mat4::orthographic_rh(-h, h, -h, h, self.znear, self.zfar)
            }
        }
    }

    /// Uniform block for this frame.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform::from_parts(
            self.view_matrix(),
            self.projection_matrix(aspect),
            self.camera.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default())
    }

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front.length() - 1.0).abs() < EPS);
        assert!((camera.up.length() - 1.0).abs() < EPS);
        assert!((camera.right.length() - 1.0).abs() < EPS);
        assert!(camera.front.dot(camera.up).abs() < EPS);
        assert!(camera.front.dot(camera.right).abs() < EPS);
        assert!(camera.up.dot(camera.right).abs() < EPS);
    }

    #[test]
    fn starts_from_configured_pose() {
        let ctrl = controller();
        let cam = ctrl.camera();
        assert_eq!(cam.position, Vec3::new(0.0, 5.0, 12.0));
        let expected = Vec3::new(0.0, -0.5, -2.0).normalize();
        assert!((cam.front - expected).length() < EPS);
        assert_eq!(cam.zoom, 80.0);
        assert_eq!(ctrl.projection_mode(), ProjectionMode::Perspective);
        assert!(ctrl.awaiting_first_sample());
        assert_orthonormal(cam);
    }

    #[test]
    fn sideways_start_keeps_basis_finite() {
        let opts = CameraOptions {
            front: [1.0, 0.0, 0.0],
            ..CameraOptions::default()
        };
        let mut ctrl = CameraController::new(&opts);
        assert!(ctrl.camera().right.is_finite());
        assert_orthonormal(ctrl.camera());
        assert!(ctrl.camera().up.dot(Vec3::Y) > 1.0 - EPS);

        ctrl.on_pointer_moved(0.0, 0.0);
        ctrl.on_pointer_moved(250.0, -400.0);
        assert_orthonormal(ctrl.camera());
        assert!(ctrl.camera().up.y > 0.0);
    }

    #[test]
    fn first_pointer_sample_does_not_turn() {
        let mut ctrl = controller();
        let before = ctrl.camera().clone();

        ctrl.on_pointer_moved(731.0, 12.0);
        assert_eq!(ctrl.camera(), &before);
        assert!(!ctrl.awaiting_first_sample());

        ctrl.on_pointer_moved(731.0, 12.0);
        let after = ctrl.camera();
        assert_eq!(after.yaw, before.yaw);
        assert_eq!(after.pitch, before.pitch);
        assert!((after.front - before.front).length() < 1e-6);
        assert!((after.right - before.right).length() < 1e-6);
        assert!((after.up - before.up).length() < 1e-6);
    }

    #[test]
    fn pointer_delta_scales_by_sensitivity() {
        let mut ctrl = controller();
        let (yaw, pitch) = (ctrl.camera().yaw, ctrl.camera().pitch);
        ctrl.on_pointer_moved(100.0, 100.0);
        ctrl.on_pointer_moved(120.0, 90.0);
        assert!((ctrl.camera().yaw - (yaw + 2.0)).abs() < EPS);
        // Pointer moved up the screen, so the view pitches up.
        assert!((ctrl.camera().pitch - (pitch + 1.0)).abs() < EPS);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut ctrl = controller();
        ctrl.on_pointer_moved(0.0, 0.0);
        for step in 1..200 {
            ctrl.on_pointer_moved(0.0, -50.0 * f64::from(step));
            assert!(ctrl.camera().pitch <= 89.0);
        }
        assert_eq!(ctrl.camera().pitch, 89.0);

        for step in 1..400 {
            ctrl.on_pointer_moved(3.0 * f64::from(step), 1e6 * f64::from(step));
            assert!(ctrl.camera().pitch >= -89.0);
        }
        assert_eq!(ctrl.camera().pitch, -89.0);
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut ctrl = controller();
        let samples = [
            (0.0, 0.0),
            (37.0, -12.0),
            (-480.0, 900.0),
            (1250.5, -3000.25),
            (1250.5, 4.0),
            (-9.0, 0.125),
        ];
        for (x, y) in samples {
            ctrl.on_pointer_moved(x, y);
            assert_orthonormal(ctrl.camera());
        }
    }

    #[test]
    fn zoom_stays_clamped() {
        let mut ctrl = controller();
        for _ in 0..50 {
            ctrl.on_scroll(7.5);
            assert!(ctrl.camera().zoom >= 1.0);
        }
        assert_eq!(ctrl.camera().zoom, 1.0);
        for _ in 0..50 {
            ctrl.on_scroll(-7.5);
            assert!(ctrl.camera().zoom <= 90.0);
        }
        assert_eq!(ctrl.camera().zoom, 90.0);
    }

    #[test]
    fn scrolling_down_twice_stops_at_upper_bound() {
        let mut ctrl = controller();
        ctrl.on_scroll(-5.0);
        assert_eq!(ctrl.camera().zoom, 85.0);
        ctrl.on_scroll(-5.0);
        assert_eq!(ctrl.camera().zoom, 90.0);
    }

    #[test]
    fn frame_tick_measures_delta() {
        let mut ctrl = controller();
        ctrl.on_frame_tick(1.0);
        ctrl.on_frame_tick(1.1);
        assert!((ctrl.delta_time() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn forward_moves_along_front() {
        let opts = CameraOptions::default();
        let mut ctrl = CameraController::new(&opts);
        let start = ctrl.camera().position;
        let front = ctrl.camera().front;

        ctrl.on_frame_tick(1.0);
        ctrl.on_frame_tick(1.1);
        ctrl.apply_input(&FrameInput {
            directions: vec![Direction::Forward],
            ..FrameInput::default()
        });

        let moved = ctrl.camera().position - start;
        let expected = opts.movement_speed * ctrl.delta_time();
        assert!((moved.length() - expected).abs() < EPS);
        assert!((opts.movement_speed * 0.1 - expected).abs() < EPS);
        assert!(moved.normalize().dot(front) > 1.0 - EPS);
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut ctrl = controller();
        let start = ctrl.camera().position;
        ctrl.on_frame_tick(0.5);
        ctrl.apply_input(&FrameInput {
            directions: Direction::ALL.to_vec(),
            ..FrameInput::default()
        });
        assert!((ctrl.camera().position - start).length() < EPS);
    }

    #[test]
    fn strafe_and_rise_follow_basis() {
        let mut ctrl = controller();
        ctrl.on_frame_tick(1.0);
        let start = ctrl.camera().position;
        let right = ctrl.camera().right;
        let up = ctrl.camera().up;

        ctrl.process_direction(Direction::Right);
        assert!(((ctrl.camera().position - start) - right * 2.5).length() < EPS);

        let mid = ctrl.camera().position;
        ctrl.process_direction(Direction::Down);
        assert!(((ctrl.camera().position - mid) + up * 2.5).length() < EPS);
    }

    #[test]
    fn projection_structure_follows_mode() {
        let mut ctrl = controller();
        let perspective = ctrl.projection_matrix(1.25);
        assert_eq!(perspective.col(2).w, -1.0);
        assert_eq!(perspective.col(3).w, 0.0);

        ctrl.set_projection_mode(ProjectionMode::Orthographic);
        let ortho = ctrl.projection_matrix(1.25);
        assert_eq!(ortho.col(2).w, 0.0);
        assert_eq!(ortho.col(3).w, 1.0);
        assert!((ortho.col(0).x - 0.1).abs() < EPS);
    }

    #[test]
    fn perspective_uses_zoom_as_fov() {
        let mut ctrl = controller();
        ctrl.on_scroll(35.0);
        let proj = ctrl.projection_matrix(1.0);
        let expected = 1.0 / (45.0_f32.to_radians() / 2.0).tan();
        assert!((proj.col(1).y - expected).abs() < EPS);
    }

    #[test]
    fn projection_request_is_idempotent() {
        let mut ctrl = controller();
        let request = FrameInput {
            projection: Some(ProjectionMode::Orthographic),
            ..FrameInput::default()
        };
        ctrl.apply_input(&request);
        ctrl.apply_input(&request);
        assert_eq!(ctrl.projection_mode(), ProjectionMode::Orthographic);

        ctrl.set_projection_mode(ProjectionMode::Perspective);
        assert_eq!(ctrl.projection_mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn view_matrix_puts_target_ahead() {
        let ctrl = controller();
        let cam = ctrl.camera();
        let ahead = ctrl.view_matrix().transform_point3(cam.position + cam.front);
        assert!(ahead.x.abs() < EPS);
        assert!(ahead.y.abs() < EPS);
        assert!((ahead.z + 1.0).abs() < EPS);
    }

    #[test]
    fn uniform_carries_eye_position() {
        let ctrl = controller();
        let uniform = ctrl.uniform(1.25);
        assert_eq!(uniform.view_position, [0.0, 5.0, 12.0]);
        assert_eq!(
            uniform.projection,
            ctrl.projection_matrix(1.25).to_cols_array_2d()
        );
    }
}
