//! Resize strategies, the `fit` parameter.

use serde::{Deserialize, Serialize};

/// How the image CDN fits an image into the requested dimensions.
///
/// [`ResizeBehaviour::Default`] omits the `fit` parameter entirely; the
/// service then resizes to fit within the bounding box, keeping the aspect
/// ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBehaviour {
    /// No `fit` parameter; fit within the bounding box.
    #[default]
    Default,
    /// Resize, then pad to the exact dimensions. Pairs with a background
    /// color for the padded area.
    Pad,
    /// Crop a part of the original image.
    Crop,
    /// Crop to the exact dimensions, upscaling if the source is smaller.
    Fill,
    /// Thumbnail creation anchored on the focus area.
    Thumb,
    /// Scale to the exact dimensions, ignoring the aspect ratio.
    Scale,
}

impl ResizeBehaviour {
    /// Wire token for the `fit` parameter, `None` for
    /// [`ResizeBehaviour::Default`].
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Pad => Some("pad"),
            Self::Crop => Some("crop"),
            Self::Fill => Some("fill"),
            Self::Thumb => Some("thumb"),
            Self::Scale => Some("scale"),
        }
    }
}
