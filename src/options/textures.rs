use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scene::TextureSlot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Where the scene textures live on disk.
pub struct TextureOptions {
    /// Directories tried in order for every texture. `""` is the working
    /// directory.
    pub search_roots: Vec<String>,
    /// Wood texture path, relative to a search root.
    pub wood: String,
    /// Brick texture path, relative to a search root.
    pub brick: String,
    /// Metal texture path, relative to a search root.
    pub metal: String,
    /// Flip images so row 0 is the bottom (OpenGL-style UVs).
    pub flip_vertically: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            search_roots: vec![String::new(), "../".into()],
            wood: "textures/wood.jpg".into(),
            brick: "textures/brick.jpg".into(),
            metal: "textures/metal.jpg".into(),
            flip_vertically: true,
        }
    }
}

impl TextureOptions {
    /// Relative path configured for `slot`.
    #[must_use]
    pub fn relative_path(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::Wood => &self.wood,
            TextureSlot::Brick => &self.brick,
            TextureSlot::Metal => &self.metal,
        }
    }

    /// Every candidate path for `slot`, in search order.
    #[must_use]
    pub fn candidates(&self, slot: TextureSlot) -> Vec<PathBuf> {
        crate::scene::textures::candidate_paths(
            &self.search_roots,
            self.relative_path(slot),
        )
    }
}
