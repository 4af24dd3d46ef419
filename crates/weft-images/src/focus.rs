//! Crop anchors, the `f` parameter.

use serde::{Deserialize, Serialize};

/// Where the image CDN anchors a crop or thumbnail.
///
/// Only consulted by the service when the resize strategy crops
/// ([`crate::ResizeBehaviour::Crop`], [`crate::ResizeBehaviour::Fill`] or
/// [`crate::ResizeBehaviour::Thumb`]); emitted regardless, since the service
/// ignores it otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    /// No `f` parameter; the service anchors at the center.
    #[default]
    Default,
    /// Explicit center anchor.
    Center,
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Left edge.
    Left,
    /// Bottom edge.
    Bottom,
    /// Top-right corner.
    TopRight,
    /// Top-left corner.
    TopLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// The largest face the service detects.
    Face,
    /// All faces the service detects.
    Faces,
}

impl FocusArea {
    /// Wire token for the `f` parameter, `None` for [`FocusArea::Default`].
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Center => Some("center"),
            Self::Top => Some("top"),
            Self::Right => Some("right"),
            Self::Left => Some("left"),
            Self::Bottom => Some("bottom"),
            Self::TopRight => Some("top_right"),
            Self::TopLeft => Some("top_left"),
            Self::BottomRight => Some("bottom_right"),
            Self::BottomLeft => Some("bottom_left"),
            Self::Face => Some("face"),
            Self::Faces => Some("faces"),
        }
    }
}
