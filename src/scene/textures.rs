//! Texture discovery and decoding.
//!
//! Each texture is looked up under a list of search roots; the first path
//! that decodes wins.

use std::path::{Path, PathBuf};

use crate::error::RoomviewError;

/// Decoded RGBA8 image ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode the image at `path`, optionally flipping it so row 0 is the
    /// bottom of the picture.
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::TextureLoad`] if the file cannot be opened
    /// or decoded.
    pub fn open(path: &Path, flip_vertically: bool) -> Result<Self, RoomviewError> {
        let decoded = image::open(path).map_err(|e| {
            RoomviewError::TextureLoad(format!("{}: {e}", path.display()))
        })?;
        let decoded = if flip_vertically {
            decoded.flipv()
        } else {
            decoded
        };
        let rgba = decoded.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }

    /// Number of levels in a full mip chain down to 1×1.
    #[must_use]
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// Downsampled levels below this one, each half the size of the
    /// previous (never below 1 pixel), with a triangle filter.
    ///
    /// Returns an empty list if the pixel buffer doesn't match the size.
    #[must_use]
    pub fn mip_chain(&self) -> Vec<Self> {
        let Some(mut level) =
            image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
        else {
            return Vec::new();
        };
        (1..self.mip_level_count())
            .map(|_| {
                let width = (level.width() / 2).max(1);
                let height = (level.height() / 2).max(1);
                level = image::imageops::resize(
                    &level,
                    width,
                    height,
                    image::imageops::FilterType::Triangle,
                );
                Self {
                    width,
                    height,
                    rgba: level.as_raw().clone(),
                }
            })
            .collect()
    }
}

/// Join `relative` onto every search root, in order.
#[must_use]
pub fn candidate_paths(roots: &[String], relative: &str) -> Vec<PathBuf> {
    roots
        .iter()
        .map(|root| Path::new(root).join(relative))
        .collect()
}

/// Try each candidate in order and return the first image that decodes,
/// together with the path it came from.
///
/// # Errors
///
/// Returns [`RoomviewError::TextureLoad`] naming every tried path and the
/// last failure if none of them decode.
pub fn load_from_candidates(
    candidates: &[PathBuf],
    flip_vertically: bool,
) -> Result<(TextureImage, PathBuf), RoomviewError> {
    let mut last_error = String::from("no candidate paths");
    for path in candidates {
        match TextureImage::open(path, flip_vertically) {
            Ok(image) => {
                log::info!(
                    "loaded texture {} ({}x{})",
                    path.display(),
                    image.width,
                    image.height
                );
                return Ok((image, path.clone()));
            }
            Err(e) => {
                log::debug!("texture candidate rejected: {e}");
                last_error = e.to_string();
            }
        }
    }

    let tried: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    Err(RoomviewError::TextureLoad(format!(
        "tried [{}]; last error: {last_error}",
        tried.join(", ")
    )))
}
