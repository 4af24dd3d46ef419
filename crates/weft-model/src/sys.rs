//! System metadata shared by entities and reference links.

use serde::{Deserialize, Serialize};

/// The `sys` object carried by every item in a delivery response.
///
/// One type serves both full entities (assets, entries) and reference links;
/// the wire omits the fields that do not apply to a given item, so everything
/// except `id` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SystemProperties {
    /// Unique id of the item within its content space.
    pub id: String,
    /// Item kind: `"Asset"`, `"Entry"` or `"Link"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Kind of the referenced item, present on links only.
    #[serde(rename = "linkType", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Locale of a single-locale payload. Absent when field values are keyed
    /// by locale instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Creation timestamp as reported by the API (ISO-8601, not parsed).
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp as reported by the API (ISO-8601, not parsed).
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl SystemProperties {
    /// System metadata carrying only an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            link_type: None,
            locale: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A typed reference to another item in the graph.
///
/// On the wire: `{"sys": {"type": "Link", "linkType": "Asset", "id": "..."}}`.
/// Reference tokens stored in untyped document metadata arrive as raw
/// [`serde_json::Value`]s and may be malformed; this is the well-formed shape
/// for code that builds links itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    /// Link metadata; `sys.id` names the referenced item.
    pub sys: SystemProperties,
}

impl Link {
    /// A link to the asset with the given id.
    #[must_use]
    pub fn to_asset(id: impl Into<String>) -> Self {
        Self::new(id, "Asset")
    }

    /// A link to the entry with the given id.
    #[must_use]
    pub fn to_entry(id: impl Into<String>) -> Self {
        Self::new(id, "Entry")
    }

    fn new(id: impl Into<String>, link_type: &str) -> Self {
        Self {
            sys: SystemProperties {
                kind: Some("Link".to_owned()),
                link_type: Some(link_type.to_owned()),
                ..SystemProperties::with_id(id)
            },
        }
    }

    /// Id of the referenced item.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}
