//! Centralized viewer options with TOML file support.
//!
//! Window, camera, key binding and texture settings are consolidated here.
//! Every section uses `#[serde(default)]`, so a file only needs to list the
//! values it overrides.

mod camera;
mod keybindings;
mod textures;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use textures::TextureOptions;
pub use window::WindowOptions;

use crate::error::RoomviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size, title and frame pacing.
    pub window: WindowOptions,
    /// Camera pose, projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
    /// Texture search paths.
    pub textures: TextureOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::Io`] if the file cannot be read and
    /// [`RoomviewError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, RoomviewError> {
        let content =
            std::fs::read_to_string(path).map_err(RoomviewError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, RoomviewError> {
        toml::from_str(content)
            .map_err(|e| RoomviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RoomviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoomviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RoomviewError::Io)?;
        }
        std::fs::write(path, content).map_err(RoomviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::scene::TextureSlot;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.zoom, 80.0);
        assert_eq!(opts.window.width, 1000);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::OrthographicProjection)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_from_toml_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
quit = "KeyX"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyX"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveUp, "Space");
        assert_eq!(bindings.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(bindings.lookup("KeyE"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nzoom = \"wide\"").unwrap_err();
        assert!(matches!(err, RoomviewError::OptionsParse(_)));
    }

    #[test]
    fn texture_candidates_follow_search_roots() {
        let textures = TextureOptions::default();
        let candidates = textures.candidates(TextureSlot::Brick);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], Path::new("textures/brick.jpg"));
        assert_eq!(candidates[1], Path::new("../textures/brick.jpg"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir().join("roomview-options-test");
        let path = dir.join("viewer.toml");
        let mut opts = Options::default();
        opts.window.title = "Test Room".into();
        opts.camera.ortho_half_extent = 4.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
