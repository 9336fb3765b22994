//! Texture registry backed by CPU-side RGBA8 data.

use crate::error::AssetError;
use std::path::Path;

/// Handle into the [`TextureLibrary`]. Id 0 is always flat white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    /// The 1x1 white fallback texture.
    pub const WHITE: TextureId = TextureId(0);
}

/// Decoded texture data ready for upload.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Single-pixel texture of the given color.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }
}

/// Registry of decoded textures keyed by [`TextureId`].
///
/// Follows the same fallback policy as the mesh registry: a failed load
/// warns and resolves to the white texture.
#[derive(Debug)]
pub struct TextureLibrary {
    textures: Vec<TextureData>,
}

impl Default for TextureLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureLibrary {
    pub fn new() -> Self {
        Self {
            textures: vec![TextureData::solid([255, 255, 255, 255])],
        }
    }

    /// Decode an image file, falling back to white on any failure.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TextureId {
        let path = path.as_ref();
        match decode_image(path) {
            Ok(data) => {
                log::info!(
                    "loaded texture {} ({}x{})",
                    path.display(),
                    data.width,
                    data.height
                );
                let id = TextureId(self.textures.len() as u32);
                self.textures.push(data);
                id
            }
            Err(err) => {
                log::warn!("texture load failed, using white: {err}");
                TextureId::WHITE
            }
        }
    }

    /// Texture data for a handle. Unknown ids resolve to white.
    pub fn get(&self, id: TextureId) -> &TextureData {
        self.textures.get(id.0 as usize).unwrap_or(&self.textures[0])
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

fn decode_image(path: &Path) -> Result<TextureData, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    Ok(TextureData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_falls_back_to_white() {
        let mut lib = TextureLibrary::new();
        let id = lib.load("does/not/exist.png");
        assert_eq!(id, TextureId::WHITE);
        let data = lib.get(id);
        assert_eq!((data.width, data.height), (1, 1));
        assert_eq!(data.rgba, vec![255, 255, 255, 255]);
    }
}
