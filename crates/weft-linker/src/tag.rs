//! Image tag emission.

use serde::{Deserialize, Serialize};
use weft_document::{Document, keys};
use weft_images::{FocusArea, ImageFormat, ImageQuery, ResizeBehaviour};
use weft_model::Asset;

/// Options for [`image_tag`](crate::DocumentLinkExt::image_tag).
///
/// All fields are optional; the enum parameters carry their own no-op
/// `Default` members. Everything deserializes with a default, so pipelines
/// can keep per-template image presets in their configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageTagOptions {
    /// Explicit alt text. A supplied value wins verbatim, even when empty;
    /// when absent, the asset's localized title is used if it is non-empty.
    pub alt: Option<String>,
    /// Target width: both the resize parameter and the `width` attribute.
    pub width: Option<u32>,
    /// Target height: both the resize parameter and the `height` attribute.
    pub height: Option<u32>,
    /// JPEG compression quality, nominally 1 to 100.
    pub jpg_quality: Option<u8>,
    /// Corner rounding radius in pixels.
    pub corner_radius: Option<u32>,
    /// Resize strategy.
    pub resize_behaviour: ResizeBehaviour,
    /// Output encoding.
    pub format: ImageFormat,
    /// Crop anchor.
    pub focus: FocusArea,
    /// Background color for padded or rounded areas.
    pub background_color: Option<String>,
}

impl ImageTagOptions {
    /// The resize parameters of these options.
    pub(crate) fn query(&self) -> ImageQuery {
        ImageQuery {
            width: self.width,
            height: self.height,
            jpg_quality: self.jpg_quality,
            corner_radius: self.corner_radius,
            resize_behaviour: self.resize_behaviour,
            format: self.format,
            focus: self.focus,
            background_color: self.background_color.clone(),
        }
    }
}

/// Emit `<img>` markup for an already-resolved asset.
///
/// The document's locale (under [`keys::ENTRY_LOCALE`]) picks the asset's
/// file and title; a document without a locale looks up under the empty
/// locale code. When the asset has no file for that locale the result is the
/// empty string.
///
/// The output shape is fixed and relied on downstream: attribute order
/// `src`, `alt`, `height`, `width`; absent dimensions render as empty
/// attribute values; values are interpolated as-is, without HTML escaping.
pub(crate) fn image_tag_for_asset(
    doc: &Document,
    asset: &Asset,
    options: &ImageTagOptions,
) -> String {
    let locale = doc.get_str(keys::ENTRY_LOCALE).unwrap_or("");

    let Some(url) = asset.url(locale) else {
        tracing::debug!(
            asset = %asset.id(),
            locale = %locale,
            "included asset has no file for the document locale, emitting empty image tag"
        );
        return String::new();
    };

    let alt = options.alt.as_deref().unwrap_or_else(|| {
        asset
            .title(locale)
            .filter(|title| !title.is_empty())
            .unwrap_or("")
    });

    format!(
        r#"<img src="{url}{query}" alt="{alt}" height="{height}" width="{width}" />"#,
        query = options.query().query_string(),
        height = DimensionAttr(options.height),
        width = DimensionAttr(options.width),
    )
}

/// A dimension attribute value: the number, or nothing at all.
struct DimensionAttr(Option<u32>);

impl std::fmt::Display for DimensionAttr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}
