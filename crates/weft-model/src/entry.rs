//! Content entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sys::SystemProperties;

/// A content entry from the response graph.
///
/// Generic over the fields payload. Include lists and document assembly work
/// with the untyped [`Value`] default; pipelines that know their content
/// model can deserialize straight into `Entry<TheirFields>` instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry<F = Value> {
    /// System metadata; `sys.id` is the entry id links refer to.
    pub sys: SystemProperties,
    /// Entry fields. Locale-keyed objects when the graph was fetched with
    /// all locales.
    pub fields: F,
}

impl<F> Entry<F> {
    /// Entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

impl Entry {
    /// Raw value of the field named `name`, for untyped entries.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
