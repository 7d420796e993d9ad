use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window, surface and frame pacing settings.
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Background color (linear RGBA).
    pub clear_color: [f64; 4],
    /// Hide and confine the cursor to the window for mouse look.
    pub capture_cursor: bool,
    /// Frame cap in frames per second (0 = unlimited).
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Roomview".into(),
            width: 1000,
            height: 800,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            capture_cursor: true,
            target_fps: 0,
        }
    }
}

impl WindowOptions {
    /// Width over height of the configured window size.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}
