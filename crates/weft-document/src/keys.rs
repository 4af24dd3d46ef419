//! Reserved metadata keys.
//!
//! Assembly copies an entry's fields into the document under their own field
//! ids and stores the linking context under these reserved keys. The `weft.`
//! prefix keeps them out of the namespace content models can use for field
//! ids.

/// Assets resolved into the delivery response alongside the current entry.
/// Stored as a JSON array of assets.
pub const INCLUDED_ASSETS: &str = "weft.included_assets";

/// Entries resolved into the delivery response alongside the current entry.
/// Stored as a JSON array of entries.
pub const INCLUDED_ENTRIES: &str = "weft.included_entries";

/// Locale the document is rendered for, e.g. `"en-US"`. Localized lookups
/// against included items use this value.
pub const ENTRY_LOCALE: &str = "weft.entry_locale";

/// Id of the entry this document was assembled from.
pub const ENTRY_ID: &str = "weft.entry_id";
