//! Typed model of a headless-CMS delivery response graph.
//!
//! A delivery query returns the matched entries together with the linked
//! assets and entries the API resolved alongside them (the "includes"). This
//! crate models that envelope and the items inside it, no more: fetching,
//! authentication and pagination all happen upstream.
//!
//! Only the fields downstream crates actually use are modeled. Serde ignores
//! unknown fields from the API response, so new API fields never break
//! parsing.
//!
//! Field values are locale-keyed maps ([`Localized`]) because graphs are
//! fetched with all locales at once; a single parsed graph then serves every
//! per-locale rendering pass.
//!
//! # Example
//!
//! ```
//! use weft_model::DeliveryCollection;
//!
//! let collection = DeliveryCollection::from_json(
//!     r#"{
//!         "items": [
//!             { "sys": { "id": "welcome", "type": "Entry" },
//!               "fields": { "title": { "en-US": "Welcome" } } }
//!         ],
//!         "includes": {
//!             "Asset": [
//!                 { "sys": { "id": "hero", "type": "Asset" },
//!                   "fields": { "title": { "en-US": "Hero shot" },
//!                               "file": { "en-US": { "url": "//images.example.com/hero.jpg" } } } }
//!             ]
//!         }
//!     }"#,
//! )?;
//!
//! assert_eq!(collection.items.len(), 1);
//! let hero = &collection.included_assets()[0];
//! assert_eq!(hero.url("en-US"), Some("//images.example.com/hero.jpg"));
//! # Ok::<(), weft_model::GraphError>(())
//! ```

mod asset;
mod collection;
mod entry;
mod localized;
mod sys;

pub use asset::{Asset, AssetFields, AssetFile, FileDetails, ImageDimensions};
pub use collection::{DeliveryCollection, GraphError, Includes};
pub use entry::Entry;
pub use localized::Localized;
pub use sys::{Link, SystemProperties};
