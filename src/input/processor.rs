//! Converts raw platform events into camera operations.
//!
//! The `InputProcessor` owns the held-key state and the key-binding map.
//! Pointer and scroll events are forwarded to the
//! [`CameraController`] as soon as they arrive; key events only change
//! which actions are held, and the per-frame [`FrameInput`] snapshot turns
//! that state into level-triggered movement and projection requests.

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::camera::{CameraController, Direction, ProjectionMode};
use crate::options::KeybindingOptions;

/// Level-triggered keyboard state for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held movement directions, in [`Direction::ALL`] order.
    pub directions: Vec<Direction>,
    /// Projection mode requested by a held key, if any.
    ///
    /// Perspective is checked before orthographic, so orthographic wins
    /// when both keys are held.
    pub projection: Option<ProjectionMode>,
    /// Whether the quit key is held.
    pub quit: bool,
}

/// Applies raw input to a [`CameraController`] and tracks held keys.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     input_processor.handle_event(event, &mut camera);
/// }
///
/// // Once per frame, after the camera clock has ticked:
/// let frame = input_processor.frame_input();
/// camera.apply_input(&frame);
/// ```
pub struct InputProcessor {
    /// Actions whose keys are currently down.
    held: HashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Process a raw input event.
    ///
    /// Returns `true` if the event was used (pointer, scroll, focus, or a
    /// bound key).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        camera: &mut CameraController,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                camera.on_pointer_moved(x, y);
                true
            }
            InputEvent::Scroll { delta_y, .. } => {
                camera.on_scroll(delta_y);
                true
            }
            InputEvent::Key { code, pressed } => self.handle_key(&code, pressed),
            InputEvent::FocusChanged { focused } => {
                if focused {
                    camera.reset_pointer();
                } else {
                    // Release events are not delivered while unfocused.
                    self.held.clear();
                }
                true
            }
        }
    }

    /// Update held state for a bound key. Unbound keys are ignored.
    fn handle_key(&mut self, code: &str, pressed: bool) -> bool {
        let Some(action) = self.key_bindings.lookup(code) else {
            return false;
        };
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
        true
    }

    /// Snapshot the held keys for this frame.
    #[must_use]
    pub fn frame_input(&self) -> FrameInput {
        let directions = Direction::ALL
            .into_iter()
            .filter(|dir| self.held.iter().any(|a| a.direction() == Some(*dir)))
            .collect();

        let mut projection = None;
        for action in [
            KeyAction::PerspectiveProjection,
            KeyAction::OrthographicProjection,
        ] {
            if self.held.contains(&action) {
                projection = action.projection_mode();
            }
        }

        FrameInput {
            directions,
            projection,
            quit: self.held.contains(&KeyAction::Quit),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
        }
    }

    fn setup() -> (InputProcessor, CameraController) {
        (
            InputProcessor::new(),
            CameraController::new(&CameraOptions::default()),
        )
    }

    #[test]
    fn held_keys_map_to_directions_in_fixed_order() {
        let (mut input, mut camera) = setup();
        assert!(input.handle_event(key("KeyQ", true), &mut camera));
        assert!(input.handle_event(key("KeyW", true), &mut camera));
        assert!(input.handle_event(key("KeyD", true), &mut camera));

        let frame = input.frame_input();
        assert_eq!(
            frame.directions,
            vec![Direction::Forward, Direction::Right, Direction::Down]
        );
        assert_eq!(frame.projection, None);
        assert!(!frame.quit);
    }

    #[test]
    fn released_keys_stop_moving() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("KeyA", true), &mut camera);
        assert_eq!(input.frame_input().directions, vec![Direction::Left]);
        let _ = input.handle_event(key("KeyA", false), &mut camera);
        assert!(input.frame_input().directions.is_empty());
    }

    #[test]
    fn holding_a_key_reasserts_every_frame() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("KeyO", true), &mut camera);
        for _ in 0..3 {
            assert_eq!(
                input.frame_input().projection,
                Some(ProjectionMode::Orthographic)
            );
        }
    }

    #[test]
    fn orthographic_wins_when_both_projection_keys_are_held() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("KeyO", true), &mut camera);
        let _ = input.handle_event(key("KeyP", true), &mut camera);
        assert_eq!(
            input.frame_input().projection,
            Some(ProjectionMode::Orthographic)
        );

        let _ = input.handle_event(key("KeyO", false), &mut camera);
        assert_eq!(
            input.frame_input().projection,
            Some(ProjectionMode::Perspective)
        );
    }

    #[test]
    fn escape_requests_quit() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("Escape", true), &mut camera);
        assert!(input.frame_input().quit);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let (mut input, mut camera) = setup();
        assert!(!input.handle_event(key("KeyZ", true), &mut camera));
        assert_eq!(input.frame_input(), FrameInput::default());
    }

    #[test]
    fn focus_loss_releases_all_keys() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("KeyW", true), &mut camera);
        let _ = input.handle_event(key("Escape", true), &mut camera);
        let _ = input.handle_event(
            InputEvent::FocusChanged { focused: false },
            &mut camera,
        );
        assert_eq!(input.frame_input(), FrameInput::default());
    }

    #[test]
    fn focus_gain_rearms_first_sample_guard() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(
            InputEvent::CursorMoved { x: 10.0, y: 10.0 },
            &mut camera,
        );
        assert!(!camera.awaiting_first_sample());

        let _ = input.handle_event(
            InputEvent::FocusChanged { focused: true },
            &mut camera,
        );
        assert!(camera.awaiting_first_sample());

        let yaw = camera.camera().yaw;
        let _ = input.handle_event(
            InputEvent::CursorMoved { x: 900.0, y: 10.0 },
            &mut camera,
        );
        assert_eq!(camera.camera().yaw, yaw);
    }

    #[test]
    fn pointer_and_scroll_reach_the_camera() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(
            InputEvent::Scroll {
                delta_x: 3.0,
                delta_y: 2.0,
            },
            &mut camera,
        );
        assert_eq!(camera.camera().zoom, 78.0);

        let _ = input.handle_event(
            InputEvent::CursorMoved { x: 0.0, y: 0.0 },
            &mut camera,
        );
        let yaw = camera.camera().yaw;
        let _ = input.handle_event(
            InputEvent::CursorMoved { x: 10.0, y: 0.0 },
            &mut camera,
        );
        assert!((camera.camera().yaw - (yaw + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn custom_bindings_drive_actions() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        let mut input = InputProcessor::with_key_bindings(bindings);
        let mut camera = CameraController::new(&CameraOptions::default());

        assert!(!input.handle_event(key("KeyW", true), &mut camera));
        assert!(input.handle_event(key("ArrowUp", true), &mut camera));
        assert!(input.is_held(KeyAction::MoveForward));
        assert_eq!(input.frame_input().directions, vec![Direction::Forward]);
    }

    #[test]
    fn rebinding_releases_held_keys() {
        let (mut input, mut camera) = setup();
        let _ = input.handle_event(key("KeyW", true), &mut camera);
        assert!(input.is_held(KeyAction::MoveForward));

        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        input.set_key_bindings(bindings);

        assert!(!input.is_held(KeyAction::MoveForward));
        assert_eq!(input.frame_input(), FrameInput::default());
        assert_eq!(
            input.key_bindings().lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        // The old key's release no longer maps to anything.
        assert!(!input.handle_event(key("KeyW", false), &mut camera));
    }
}
