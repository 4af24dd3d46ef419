//! The document extension trait.

use serde_json::Value;
use weft_document::Document;
use weft_model::{Asset, Entry};

use crate::resolve::{resolve_by_id, resolve_token, token_id};
use crate::tag::{ImageTagOptions, image_tag_for_asset};

/// Link-graph convenience methods on [`Document`].
///
/// An extension trait keeps the document store itself free of model and
/// image dependencies. All methods are pure reads over the include lists
/// attached at assembly time; a reference that does not resolve is a content
/// problem and degrades softly, `None` for lookups and the empty string for
/// markup.
pub trait DocumentLinkExt {
    /// Resolve a raw reference token to an included asset.
    fn included_asset(&self, token: &Value) -> Option<Asset>;

    /// Included asset with the given id.
    fn included_asset_by_id(&self, id: &str) -> Option<Asset>;

    /// Resolve a raw reference token to an included entry.
    fn included_entry(&self, token: &Value) -> Option<Entry>;

    /// Included entry with the given id.
    fn included_entry_by_id(&self, id: &str) -> Option<Entry>;

    /// `<img>` markup for the asset a reference token points to.
    ///
    /// The empty string when the token does not resolve or the asset has no
    /// file for the document's locale.
    fn image_tag(&self, token: &Value, options: &ImageTagOptions) -> String;

    /// `<img>` markup for the included asset with the given id.
    ///
    /// The empty string when no such asset is included or it has no file for
    /// the document's locale.
    fn image_tag_by_id(&self, asset_id: &str, options: &ImageTagOptions) -> String;
}

impl DocumentLinkExt for Document {
    fn included_asset(&self, token: &Value) -> Option<Asset> {
        resolve_token(self, token)
    }

    fn included_asset_by_id(&self, id: &str) -> Option<Asset> {
        resolve_by_id(self, id)
    }

    fn included_entry(&self, token: &Value) -> Option<Entry> {
        resolve_token(self, token)
    }

    fn included_entry_by_id(&self, id: &str) -> Option<Entry> {
        resolve_by_id(self, id)
    }

    fn image_tag(&self, token: &Value, options: &ImageTagOptions) -> String {
        if let Some(asset) = self.included_asset(token) {
            image_tag_for_asset(self, &asset, options)
        } else {
            tracing::debug!(
                token_id = token_id(token).unwrap_or("<malformed>"),
                "reference token did not resolve to an included asset, emitting empty image tag"
            );
            String::new()
        }
    }

    fn image_tag_by_id(&self, asset_id: &str, options: &ImageTagOptions) -> String {
        if let Some(asset) = self.included_asset_by_id(asset_id) {
            image_tag_for_asset(self, &asset, options)
        } else {
            tracing::debug!(
                asset = %asset_id,
                "included asset not found, emitting empty image tag"
            );
            String::new()
        }
    }
}
