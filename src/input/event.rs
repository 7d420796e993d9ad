/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// applies pointer and scroll events to the camera straight away and keeps
/// key events as held-key state for the next frame.
///
/// # Example
///
/// ```ignore
/// input_processor.handle_event(
///     InputEvent::CursorMoved { x: 500.0, y: 400.0 },
///     &mut camera_controller,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels (grows downward).
        y: f64,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Horizontal scroll amount (ignored by the camera).
        delta_x: f64,
        /// Vertical scroll amount (positive = away from the user).
        delta_y: f64,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code string in winit `KeyCode` debug form (`"KeyW"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Window focus gained or lost.
    FocusChanged {
        /// Whether the window now has focus.
        focused: bool,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it carries input the viewer uses.
    ///
    /// Pixel-based scroll deltas are scaled down to roughly line units.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (delta_x, delta_y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (f64::from(*x), f64::from(*y))
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x * 0.01, pos.y * 0.01)
                    }
                };
                Some(Self::Scroll { delta_x, delta_y })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Focused(focused) => {
                Some(Self::FocusChanged { focused: *focused })
            }
            _ => None,
        }
    }
}

/// Pointer position rebuilt from relative motion.
///
/// While the cursor is grabbed the window stops reporting useful absolute
/// positions at its edges. Raw device deltas are summed here instead and
/// handed on as ordinary [`InputEvent::CursorMoved`] samples, so turning
/// is not limited by the window size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualCursor {
    x: f64,
    y: f64,
}

impl VirtualCursor {
    /// Move by a relative delta and return the resulting sample.
    pub fn moved_by(&mut self, dx: f64, dy: f64) -> InputEvent {
        self.x += dx;
        self.y += dy;
        InputEvent::CursorMoved {
            x: self.x,
            y: self.y,
        }
    }

    /// Accumulated position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
