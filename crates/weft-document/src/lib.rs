//! Per-page document context for content-graph pipelines.
//!
//! A [`Document`] is the rendering context of one page: an untyped key/value
//! store holding the source entry's fields plus a handful of reserved
//! entries ([`keys`]) that carry the linking context, namely the include
//! lists of the delivery response the entry came from and the locale the
//! page is rendered for.
//!
//! Documents are assembled once (see [`documents_from_collection`]) and then
//! only read. Retrieval is typed on access and soft-failing throughout:
//! absent keys and shape mismatches come back as `None` or empty collections
//! rather than errors, because a half-broken link graph must degrade a page,
//! not kill the build.
//!
//! # Example
//!
//! ```
//! use weft_document::{documents_from_collection, keys};
//! use weft_model::{Asset, DeliveryCollection};
//!
//! let collection = DeliveryCollection::from_json(
//!     r#"{
//!         "items": [
//!             { "sys": { "id": "welcome" }, "fields": { "title": { "en-US": "Welcome" } } }
//!         ],
//!         "includes": {
//!             "Asset": [ { "sys": { "id": "hero" }, "fields": {} } ]
//!         }
//!     }"#,
//! )?;
//!
//! let docs = documents_from_collection(&collection, "en-US");
//! assert_eq!(docs[0].get_str(keys::ENTRY_ID), Some("welcome"));
//! assert_eq!(docs[0].list::<Asset>(keys::INCLUDED_ASSETS).len(), 1);
//! # Ok::<(), weft_model::GraphError>(())
//! ```

mod assemble;
mod document;
pub mod keys;

pub use assemble::{document_from_entry, documents_from_collection};
pub use document::Document;
