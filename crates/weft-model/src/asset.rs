//! Linked media assets.

use serde::{Deserialize, Serialize};

use crate::localized::Localized;
use crate::sys::SystemProperties;

/// A media asset from the response graph, usually an image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Asset {
    /// System metadata; `sys.id` is the asset id links refer to.
    pub sys: SystemProperties,
    /// Localized asset fields. Defaults to empty maps when the API returns
    /// an asset without fields.
    #[serde(default)]
    pub fields: AssetFields,
}

/// Localized fields of an [`Asset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetFields {
    /// Human-readable title per locale.
    #[serde(default)]
    pub title: Localized<String>,
    /// The binary file per locale.
    #[serde(default)]
    pub file: Localized<AssetFile>,
}

/// One locale's file of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetFile {
    /// File URL on the asset CDN, often protocol-relative (`//images...`).
    pub url: String,
    /// MIME type of the file.
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Name of the originally uploaded file.
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size and image dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
}

/// File metadata reported by the delivery API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileDetails {
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Pixel dimensions, present for image files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDimensions>,
}

/// Intrinsic pixel dimensions of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Asset {
    /// Asset id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Title for `locale`, if one is present.
    #[must_use]
    pub fn title(&self, locale: &str) -> Option<&str> {
        self.fields.title.get(locale).map(String::as_str)
    }

    /// File for `locale`, if one is present.
    #[must_use]
    pub fn file(&self, locale: &str) -> Option<&AssetFile> {
        self.fields.file.get(locale)
    }

    /// File URL for `locale`, if a file is present.
    #[must_use]
    pub fn url(&self, locale: &str) -> Option<&str> {
        self.file(locale).map(|file| file.url.as_str())
    }
}
