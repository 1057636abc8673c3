//! Client-side list filters. Each one writes the shared `hidden` flag of
//! every slot directly; applying one filter ignores what the other hid.

use crate::contacts::store::ContactStore;

pub fn no_match_message(text: &str) -> String {
    format!("There are no contact names starting with \"{text}.\"")
}

pub fn show_all(store: &mut ContactStore) {
    for slot in store.slots_mut() {
        slot.hidden = false;
    }
}

pub fn by_tag(store: &mut ContactStore, tag: &str) {
    for slot in store.slots_mut() {
        slot.hidden = !slot.contact.tag_list().contains(&tag);
    }
}

/// Case-insensitive name prefix filter. Returns the no-match message when
/// the list is non-empty and every entry ended up hidden.
pub fn by_name_prefix(store: &mut ContactStore, text: &str) -> Option<String> {
    if text.trim().is_empty() {
        show_all(store);
    } else {
        let needle = text.to_uppercase();
        for slot in store.slots_mut() {
            slot.hidden = !slot.contact.full_name.to_uppercase().starts_with(&needle);
        }
    }

    if !store.is_empty() && store.visible_count() == 0 {
        Some(no_match_message(text))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Contact, ContactId};

    fn store(rows: &[(&str, Option<&str>)]) -> ContactStore {
        let mut store = ContactStore::default();
        for (i, (name, tags)) in rows.iter().enumerate() {
            store.push(Contact {
                id: ContactId(i as u64 + 1),
                full_name: name.to_string(),
                phone_number: "1112223333".into(),
                email: "x@example.com".into(),
                tags: tags.map(str::to_string),
            });
        }
        store
    }

    fn visible(store: &ContactStore) -> Vec<&str> {
        store
            .slots()
            .iter()
            .filter(|s| !s.hidden)
            .map(|s| s.contact.full_name.as_str())
            .collect()
    }

    #[test]
    fn name_prefix_is_case_insensitive() {
        let mut store = store(&[("John Smith", None), ("jody Lane", None), ("Alice Wu", None)]);
        let placeholder = by_name_prefix(&mut store, "Jo");
        assert_eq!(visible(&store), ["John Smith", "jody Lane"]);
        assert_eq!(placeholder, None);
    }

    #[test]
    fn all_hidden_yields_placeholder_with_search_text() {
        let mut store = store(&[("John Smith", None), ("Alice Wu", None)]);
        let placeholder = by_name_prefix(&mut store, "Zed").expect("placeholder");
        assert!(visible(&store).is_empty());
        assert!(placeholder.contains("\"Zed"));
    }

    #[test]
    fn blank_search_shows_everything() {
        let mut store = store(&[("John Smith", None), ("Alice Wu", None)]);
        by_name_prefix(&mut store, "Al");
        assert_eq!(by_name_prefix(&mut store, "   "), None);
        assert_eq!(visible(&store).len(), 2);
    }

    #[test]
    fn empty_list_never_shows_placeholder() {
        let mut store = ContactStore::default();
        assert_eq!(by_name_prefix(&mut store, "Jo"), None);
    }

    #[test]
    fn tag_filter_then_clear() {
        let mut store = store(&[
            ("John Smith", Some("Sales,Engineering")),
            ("jody Lane", None),
            ("Alice Wu", Some("Marketing")),
        ]);
        by_tag(&mut store, "Sales");
        assert_eq!(visible(&store), ["John Smith"]);

        show_all(&mut store);
        assert_eq!(visible(&store).len(), 3);
    }

    #[test]
    fn tag_filter_does_not_match_substrings() {
        let mut store = store(&[("John Smith", Some("Salesforce"))]);
        by_tag(&mut store, "Sales");
        assert!(visible(&store).is_empty());
    }
}
