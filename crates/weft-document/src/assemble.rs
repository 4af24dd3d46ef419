//! Assembly of documents from a delivery response.

use serde_json::Value;
use weft_model::{DeliveryCollection, Entry, Includes};

use crate::document::Document;
use crate::keys;

/// Build one document per collection item.
///
/// Every document carries the collection's shared include lists, so a linked
/// item resolves identically from any page of the batch.
#[must_use]
pub fn documents_from_collection(collection: &DeliveryCollection, locale: &str) -> Vec<Document> {
    let includes = collection.includes.as_ref();
    let documents: Vec<Document> = collection
        .items
        .iter()
        .map(|entry| document_from_entry(entry, includes, locale))
        .collect();

    tracing::debug!(
        documents = documents.len(),
        included_assets = collection.included_assets().len(),
        included_entries = collection.included_entries().len(),
        locale = %locale,
        "assembled documents from delivery collection"
    );

    documents
}

/// Build the rendering context for a single entry.
///
/// The entry's fields are copied into the document under their own field ids
/// (a non-object `fields` payload contributes nothing), then the reserved
/// [`keys`] entries are written. Reserved keys are written last and win over
/// any colliding field id.
#[must_use]
pub fn document_from_entry(entry: &Entry, includes: Option<&Includes>, locale: &str) -> Document {
    let mut doc = Document::new();

    if let Value::Object(fields) = &entry.fields {
        for (name, value) in fields {
            doc = doc.with_raw(name.clone(), value.clone());
        }
    }

    let (assets, entries) = match includes {
        Some(includes) => (includes.assets.as_slice(), includes.entries.as_slice()),
        None => (&[][..], &[][..]),
    };

    doc.with_raw(keys::ENTRY_ID, Value::String(entry.sys.id.clone()))
        .with_raw(keys::ENTRY_LOCALE, Value::String(locale.to_owned()))
        .with_value(keys::INCLUDED_ASSETS, assets)
        .with_value(keys::INCLUDED_ENTRIES, entries)
}
