//! Locale-keyed field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A field value keyed by locale code, e.g. `"en-US"` or `"de-DE"`.
///
/// This is the shape field values take when a graph is fetched with all
/// locales. Lookups that miss return `None`; which locale a caller asks for
/// is their business, nothing here falls back to a default locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Localized<T>(BTreeMap<String, T>);

impl<T> Localized<T> {
    /// An empty map with no locale values.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value for `locale`, if one is present.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.0.get(locale)
    }

    /// Set the value for `locale`, returning the previous one.
    pub fn insert(&mut self, locale: impl Into<String>, value: T) -> Option<T> {
        self.0.insert(locale.into(), value)
    }

    /// Number of locales with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no locale has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(locale, value)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(locale, value)| (locale.as_str(), value))
    }
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BTreeMap<String, T>> for Localized<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        Self(map)
    }
}

impl<T, L: Into<String>> FromIterator<(L, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, value)| (locale.into(), value))
                .collect(),
        )
    }
}
