//! Lookup of linked items in a document's include lists.

use serde::de::DeserializeOwned;
use serde_json::Value;
use weft_document::{Document, keys};
use weft_model::{Asset, Entry};

/// A linked item kind that can be looked up in a document's include lists.
///
/// Ties a model type to the reserved metadata key its include list is stored
/// under, so one resolver serves assets and entries (typed or untyped)
/// alike.
pub trait Included: DeserializeOwned {
    /// Reserved metadata key of this kind's include list.
    const KEY: &'static str;

    /// System id of the item.
    fn id(&self) -> &str;
}

impl Included for Asset {
    const KEY: &'static str = keys::INCLUDED_ASSETS;

    fn id(&self) -> &str {
        &self.sys.id
    }
}

impl<F: DeserializeOwned> Included for Entry<F> {
    const KEY: &'static str = keys::INCLUDED_ENTRIES;

    fn id(&self) -> &str {
        &self.sys.id
    }
}

/// Extract the referenced id from a raw reference token.
///
/// A well-formed token is `{"sys": {"id": "..."}}`. Anything else (a
/// non-object, a missing `sys` or `id`, a non-string id) is `None`; a
/// malformed reference reads as "not found", never as an error.
#[must_use]
pub fn token_id(token: &Value) -> Option<&str> {
    token.get("sys")?.get("id")?.as_str()
}

/// First item of kind `T` with the given id in the document's include list.
///
/// Scans the list in response order, so with duplicated ids the earliest
/// item wins. Absence is a normal outcome: entries regularly reference items
/// the query did not pull in.
#[must_use]
pub fn resolve_by_id<T: Included>(doc: &Document, id: &str) -> Option<T> {
    doc.list::<T>(T::KEY)
        .into_iter()
        .find(|item| item.id() == id)
}

/// Resolve a raw reference token to an item of kind `T`.
///
/// Combines [`token_id`] and [`resolve_by_id`]; malformed tokens resolve to
/// `None`.
#[must_use]
pub fn resolve_token<T: Included>(doc: &Document, token: &Value) -> Option<T> {
    resolve_by_id(doc, token_id(token)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use weft_document::{Document, keys};
    use weft_model::{Asset, Entry};

    use super::{resolve_by_id, resolve_token, token_id};

    fn doc_with_assets() -> Document {
        Document::new().with_raw(
            keys::INCLUDED_ASSETS,
            json!([
                { "sys": { "id": "first" }, "fields": { "title": { "en-US": "One" } } },
                { "sys": { "id": "second" }, "fields": {} },
                { "sys": { "id": "first" }, "fields": { "title": { "en-US": "Shadowed" } } }
            ]),
        )
    }

    #[test]
    fn extracts_id_from_well_formed_token() {
        let token = json!({ "sys": { "id": "abc", "type": "Link", "linkType": "Asset" } });

        assert_eq!(token_id(&token), Some("abc"));
    }

    #[test]
    fn malformed_tokens_have_no_id() {
        assert_eq!(token_id(&json!(null)), None);
        assert_eq!(token_id(&json!("sys")), None);
        assert_eq!(token_id(&json!({})), None);
        assert_eq!(token_id(&json!({ "sys": {} })), None);
        assert_eq!(token_id(&json!({ "sys": { "id": 7 } })), None);
        assert_eq!(token_id(&json!({ "sys": null })), None);
    }

    #[test]
    fn resolves_by_id() {
        let doc = doc_with_assets();

        let asset: Asset = resolve_by_id(&doc, "second").unwrap();
        assert_eq!(asset.id(), "second");
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let doc = doc_with_assets();

        assert_eq!(resolve_by_id::<Asset>(&doc, "nope"), None);
    }

    #[test]
    fn duplicate_ids_resolve_to_the_earliest_item() {
        let doc = doc_with_assets();

        let asset: Asset = resolve_by_id(&doc, "first").unwrap();
        assert_eq!(asset.title("en-US"), Some("One"));
    }

    #[test]
    fn resolves_token_end_to_end() {
        let doc = doc_with_assets();
        let token = json!({ "sys": { "id": "first" } });

        assert!(resolve_token::<Asset>(&doc, &token).is_some());
        assert_eq!(resolve_token::<Asset>(&doc, &json!({})), None);
    }

    #[test]
    fn entries_resolve_from_their_own_list() {
        let doc = Document::new()
            .with_raw(
                keys::INCLUDED_ENTRIES,
                json!([{ "sys": { "id": "linked" }, "fields": { "slug": { "en-US": "a" } } }]),
            )
            .with_raw(keys::INCLUDED_ASSETS, json!([{ "sys": { "id": "linked" }, "fields": {} }]));

        let entry: Entry = resolve_by_id(&doc, "linked").unwrap();
        assert_eq!(entry.id(), "linked");
        assert!(entry.field("slug").is_some());
    }

    #[test]
    fn typed_entries_resolve_through_the_same_resolver() {
        #[derive(Debug, serde::Deserialize)]
        struct CardFields {
            title: weft_model::Localized<String>,
        }

        let doc = Document::new().with_raw(
            keys::INCLUDED_ENTRIES,
            json!([{ "sys": { "id": "card" }, "fields": { "title": { "en-US": "A card" } } }]),
        );

        let entry: Entry<CardFields> = resolve_by_id(&doc, "card").unwrap();
        assert_eq!(
            entry.fields.title.get("en-US").map(String::as_str),
            Some("A card")
        );
    }

    #[test]
    fn malformed_list_elements_are_skipped() {
        let doc = Document::new().with_raw(
            keys::INCLUDED_ASSETS,
            json!([
                "garbage",
                { "sys": { "id": "ok" }, "fields": {} }
            ]),
        );

        let asset: Asset = resolve_by_id(&doc, "ok").unwrap();
        assert_eq!(asset.id(), "ok");
    }

    #[test]
    fn missing_include_list_resolves_to_none() {
        let doc = Document::new();

        assert_eq!(resolve_by_id::<Asset>(&doc, "anything"), None);
    }
}
