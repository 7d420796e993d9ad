//! Input handling: event types, bindable key actions, and the input
//! processor that applies raw events to the camera.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Applies events to the camera and snapshots held keys per frame.
pub mod processor;

pub use event::{InputEvent, VirtualCursor};
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
