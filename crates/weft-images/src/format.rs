//! Output encodings, the `fm` parameter.

use serde::{Deserialize, Serialize};

/// Output encoding the image CDN converts to.
///
/// [`ImageFormat::Default`] omits the `fm` parameter and keeps the source
/// format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    /// No `fm` parameter; keep the source format.
    #[default]
    Default,
    /// JPEG. Pairs with the quality parameter.
    Jpg,
    /// PNG.
    Png,
    /// WebP.
    Webp,
    /// GIF.
    Gif,
    /// AVIF.
    Avif,
}

impl ImageFormat {
    /// Wire token for the `fm` parameter, `None` for
    /// [`ImageFormat::Default`].
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Jpg => Some("jpg"),
            Self::Png => Some("png"),
            Self::Webp => Some("webp"),
            Self::Gif => Some("gif"),
            Self::Avif => Some("avif"),
        }
    }
}
