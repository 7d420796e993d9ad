use serde::{Deserialize, Serialize};

use crate::camera::{Direction, ProjectionMode};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// orthographic_projection = "KeyO"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the camera front vector.
    MoveForward,
    /// Move against the camera front vector.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise along the camera up vector.
    MoveUp,
    /// Sink along the camera up vector.
    MoveDown,
    /// Switch to perspective projection.
    PerspectiveProjection,
    /// Switch to orthographic projection.
    OrthographicProjection,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// Movement direction driven by this action, if any.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveForward => Some(Direction::Forward),
            Self::MoveBackward => Some(Direction::Backward),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }

    /// Projection mode requested by this action, if any.
    #[must_use]
    pub fn projection_mode(self) -> Option<ProjectionMode> {
        match self {
            Self::PerspectiveProjection => Some(ProjectionMode::Perspective),
            Self::OrthographicProjection => Some(ProjectionMode::Orthographic),
            _ => None,
        }
    }
}
