//! Standalone window backed by winit.
//!
//! ```no_run
//! # use roomview::Viewer;
//! Viewer::builder()
//!     .with_title("Bathroom")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    error::RoomviewError, input::VirtualCursor, options::Options, InputEvent,
    RoomEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding `[window] title`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the bathroom scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), RoomviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| RoomviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            cursor_captured: false,
            focused: true,
            virtual_cursor: VirtualCursor::default(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| RoomviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RoomEngine>,
    /// Taken when the engine is created.
    options: Option<Options>,
    /// Mouse look reads raw device motion instead of cursor positions.
    cursor_captured: bool,
    focused: bool,
    virtual_cursor: VirtualCursor,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Hide the cursor and pin it to the window for mouse look.
fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

impl ViewerApp {
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        if engine.frame_timing.should_render() {
            if engine.update() {
                log::info!("quit requested");
                event_loop.exit();
                return;
            }
            match engine.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                    let (w, h) = viewport_size(window.inner_size());
                    engine.resize(w, h);
                }
                Err(e) => {
                    log::error!("render error: {e:?}");
                }
            }
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(&options.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                options.window.width,
                options.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if options.window.capture_cursor {
            capture_cursor(&window);
            self.cursor_captured = true;
        }

        let size = viewport_size(window.inner_size());
        let engine =
            match pollster::block_on(RoomEngine::new(window.clone(), size, options)) {
                Ok(e) => e,
                Err(e) => {
                    log::error!("Failed to initialize engine: {e}");
                    event_loop.exit();
                    return;
                }
            };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    let (w, h) = viewport_size(size);
                    engine.resize(w, h);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            // Captured mouse look is driven from `device_event`.
            WindowEvent::CursorMoved { .. } if self.cursor_captured => {}
            other => {
                if let WindowEvent::Focused(focused) = other {
                    self.focused = focused;
                    // Some platforms drop the grab while unfocused.
                    if focused && self.cursor_captured {
                        if let Some(window) = &self.window {
                            capture_cursor(window);
                        }
                    }
                }
                if let (Some(engine), Some(input)) =
                    (&mut self.engine, InputEvent::from_window_event(&other))
                {
                    let _ = engine.handle_input(input);
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let DeviceEvent::MouseMotion { delta: (dx, dy) } = event else {
            return;
        };
        if !self.cursor_captured || !self.focused {
            return;
        }
        if let Some(engine) = &mut self.engine {
            let _ = engine.handle_input(self.virtual_cursor.moved_by(dx, dy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_title_overrides_options() {
        let viewer = Viewer::builder()
            .with_options(Options::default())
            .with_title("Bathroom")
            .build();
        assert_eq!(viewer.options.window.title, "Bathroom");
    }

    #[test]
    fn builder_keeps_option_title_by_default() {
        let mut options = Options::default();
        options.window.title = "From file".to_owned();
        let viewer = Viewer::builder().with_options(options).build();
        assert_eq!(viewer.options.window.title, "From file");
    }

    #[test]
    fn viewport_is_never_zero() {
        assert_eq!(
            viewport_size(winit::dpi::PhysicalSize::new(0, 0)),
            (1, 1)
        );
    }
}
