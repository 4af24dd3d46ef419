//! The untyped per-page metadata store.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The rendering context of a single page.
///
/// An untyped key/value store over JSON values. Writes go through the
/// consuming `with_*` builders at assembly time; reads deserialize on access
/// and never fail loudly. Typed getters return `None` (or an empty vector)
/// when a key is absent or the stored value does not match the requested
/// shape.
#[derive(Debug, Clone, Default)]
pub struct Document {
    metadata: HashMap<String, Value>,
}

impl Document {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a serializable value under `key`.
    ///
    /// Silently does nothing if serialization fails.
    #[must_use]
    pub fn with_value<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), value);
        }
        self
    }

    /// Add a raw JSON value under `key`.
    #[must_use]
    pub fn with_raw(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Typed value stored under `key`.
    ///
    /// `None` when the key is absent or the stored value does not
    /// deserialize into `T`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.metadata.get(key)?;
        T::deserialize(value).ok()
    }

    /// Typed list stored under `key`.
    ///
    /// Empty when the key is absent or the stored value is not an array.
    /// Elements that do not deserialize into `T` are skipped, so one
    /// malformed include never hides the rest.
    #[must_use]
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.metadata.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// String stored under `key`, borrowed.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)?.as_str()
    }

    /// Raw stored value under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// True when a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::Document;

    static_assertions::assert_impl_all!(Document: Send, Sync, Clone);

    #[test]
    fn typed_get_round_trips_through_json() {
        let doc = Document::new()
            .with_value("count", &3_u32)
            .with_raw("tags", json!(["a", "b"]));

        assert_eq!(doc.get::<u32>("count"), Some(3));
        assert_eq!(doc.get::<Vec<String>>("tags").unwrap(), ["a", "b"]);
    }

    #[test]
    fn absent_key_is_none() {
        let doc = Document::new();

        assert_eq!(doc.get::<String>("missing"), None);
        assert_eq!(doc.get_str("missing"), None);
        assert!(!doc.contains("missing"));
    }

    #[test]
    fn shape_mismatch_is_none_not_error() {
        let doc = Document::new().with_raw("count", json!("three"));

        assert_eq!(doc.get::<u32>("count"), None);
        // The raw value is still there untouched.
        assert_eq!(doc.raw("count"), Some(&json!("three")));
    }

    #[test]
    fn list_of_absent_or_non_array_key_is_empty() {
        let doc = Document::new().with_raw("scalar", json!(42));

        assert!(doc.list::<u32>("missing").is_empty());
        assert!(doc.list::<u32>("scalar").is_empty());
    }

    #[test]
    fn list_skips_malformed_elements() {
        let doc = Document::new().with_raw("nums", json!([1, "two", 3]));

        assert_eq!(doc.list::<u32>("nums"), [1, 3]);
    }

    #[test]
    fn unserializable_value_is_silently_skipped() {
        let doc = Document::new().with_value("nan", &f64::NAN);

        assert!(!doc.contains("nan"));
        assert!(doc.is_empty());
    }

    #[test]
    fn later_write_wins() {
        let doc = Document::new()
            .with_raw("k", json!(1))
            .with_raw("k", json!(2));

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get::<u32>("k"), Some(2));
    }

    #[test]
    fn get_str_only_matches_strings() {
        let doc = Document::new()
            .with_raw("s", json!("text"))
            .with_raw("n", json!(5));

        assert_eq!(doc.get_str("s"), Some("text"));
        assert_eq!(doc.get_str("n"), None);
    }

    #[test]
    fn get_clones_nothing_into_value_borrow() {
        let doc = Document::new().with_raw("obj", json!({ "a": 1 }));
        let raw: &Value = doc.raw("obj").unwrap();

        assert_eq!(raw.get("a"), Some(&json!(1)));
    }
}
