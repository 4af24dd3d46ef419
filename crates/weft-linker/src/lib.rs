//! Link resolution and image tag emission over assembled documents.
//!
//! Content entries refer to images and to each other through reference
//! tokens, JSON objects of the shape `{"sys": {"id": "..."}}`. The delivery
//! API resolves those references into the include lists that document
//! assembly attaches to every page. This crate closes the loop at render
//! time: [`DocumentLinkExt`] looks tokens up in the include lists and turns
//! asset references into ready-to-embed `<img>` markup with image CDN resize
//! parameters baked into the URL.
//!
//! Everything here is a pure read over one document. Broken references are a
//! content problem, not a build problem: lookups return `None`, tag emission
//! returns the empty string, and a debug event records what was skipped.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use weft_document::{Document, keys};
//! use weft_linker::{DocumentLinkExt, ImageTagOptions};
//!
//! let doc = Document::new()
//!     .with_raw(keys::ENTRY_LOCALE, json!("en-US"))
//!     .with_raw(keys::INCLUDED_ASSETS, json!([{
//!         "sys": { "id": "hero", "type": "Asset" },
//!         "fields": {
//!             "title": { "en-US": "Hero shot" },
//!             "file": { "en-US": { "url": "https://images.example.com/hero.jpg" } }
//!         }
//!     }]));
//!
//! let token = json!({ "sys": { "id": "hero" } });
//! let options = ImageTagOptions { width: Some(640), ..ImageTagOptions::default() };
//!
//! assert_eq!(
//!     doc.image_tag(&token, &options),
//!     r#"<img src="https://images.example.com/hero.jpg?w=640" alt="Hero shot" height="" width="640" />"#
//! );
//! ```

mod ext;
mod resolve;
mod tag;

pub use ext::DocumentLinkExt;
pub use resolve::{Included, resolve_by_id, resolve_token, token_id};
pub use tag::ImageTagOptions;
