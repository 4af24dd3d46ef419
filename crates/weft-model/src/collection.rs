//! The delivery collection envelope.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::entry::Entry;

/// Error from parsing a delivery response graph.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// The payload was not valid JSON or did not match the collection shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page of entries returned by a delivery query, together with the
/// linked items the API resolved alongside them.
///
/// Pagination bookkeeping (`total`, `skip`, `limit`) is deliberately not
/// modeled; fetching and paging happen upstream of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeliveryCollection {
    /// Entries matched by the query.
    #[serde(default)]
    pub items: Vec<Entry>,
    /// Linked items resolved into the response. Absent when the query
    /// matched nothing with links, or was made with `include=0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Includes>,
}

/// Linked items attached to a [`DeliveryCollection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Includes {
    /// Linked assets, keyed `"Asset"` on the wire.
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
    /// Linked entries, keyed `"Entry"` on the wire.
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Entry>,
}

impl DeliveryCollection {
    /// Parse a collection from raw response JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Json`] when the payload is not valid JSON or
    /// does not match the collection shape.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Included assets; empty when the response carried none.
    #[must_use]
    pub fn included_assets(&self) -> &[Asset] {
        self.includes
            .as_ref()
            .map_or(&[], |includes| includes.assets.as_slice())
    }

    /// Included entries; empty when the response carried none.
    #[must_use]
    pub fn included_entries(&self) -> &[Entry] {
        self.includes
            .as_ref()
            .map_or(&[], |includes| includes.entries.as_slice())
    }
}
