//! Asset loading errors.

use std::path::PathBuf;

/// Why an asset failed to load.
///
/// Loaders report these internally; the public registry APIs swallow them
/// with a warning and hand back empty handles so a missing file never
/// takes the game down.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse OBJ {path}: {source}")]
    ObjParse {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
