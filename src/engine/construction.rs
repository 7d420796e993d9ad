//! Free functions for engine construction.

use std::collections::HashMap;

use crate::{
    options::TextureOptions,
    scene::{textures, Scene, TextureImage, TextureSlot},
};

/// Load every texture the scene references.
///
/// A texture that cannot be found or decoded is logged and left out of the
/// map; the renderer substitutes a white fallback for it.
pub(super) fn load_scene_textures(
    scene: &Scene,
    options: &TextureOptions,
) -> HashMap<TextureSlot, TextureImage> {
    let mut images = HashMap::new();
    for slot in scene.textures_used() {
        match textures::load_from_candidates(
            &options.candidates(slot),
            options.flip_vertically,
        ) {
            Ok((image, _path)) => {
                let _ = images.insert(slot, image);
            }
            Err(e) => {
                log::warn!("{slot:?} texture unavailable, using white: {e}");
            }
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_textures_are_left_out() {
        let options = TextureOptions {
            search_roots: vec!["/definitely/not/here".to_owned()],
            ..TextureOptions::default()
        };
        let images = load_scene_textures(&Scene::bathroom(), &options);
        assert!(images.is_empty());
    }

    #[test]
    fn found_textures_are_keyed_by_slot() {
        let dir: PathBuf = std::env::temp_dir()
            .join(format!("roomview-engine-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("textures")).unwrap();
        image::RgbaImage::new(2, 2)
            .save(dir.join("textures/brick.png"))
            .unwrap();

        let options = TextureOptions {
            search_roots: vec![dir.display().to_string()],
            brick: "textures/brick.png".to_owned(),
            ..TextureOptions::default()
        };
        let images = load_scene_textures(&Scene::bathroom(), &options);
        assert_eq!(images.len(), 1);
        assert_eq!(images[&TextureSlot::Brick].width, 2);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
