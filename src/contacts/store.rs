use crate::api::models::{Contact, ContactId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub contact: Contact,
    pub hidden: bool,
}

/// In-memory copy of the contacts currently listed, in display order.
/// The list widget is rebuilt from this; nothing is read back from widgets.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    slots: Vec<Slot>,
}

impl ContactStore {
    pub fn push(&mut self, contact: Contact) {
        self.slots.push(Slot { contact, hidden: false });
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.slots.iter().position(|s| s.contact.id == id)
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.position(id).map(|i| &self.slots[i].contact)
    }

    /// Swap the record at `id` for `contact`, keeping its position and
    /// visibility. Returns false when `id` is not listed.
    pub fn replace(&mut self, id: ContactId, contact: Contact) -> bool {
        match self.position(id) {
            Some(i) => {
                self.slots[i].contact = contact;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        self.position(id).map(|i| self.slots.remove(i).contact)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.hidden).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64, name: &str) -> Contact {
        Contact {
            id: ContactId(id),
            full_name: name.into(),
            phone_number: "1112223333".into(),
            email: "x@example.com".into(),
            tags: None,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut store = ContactStore::default();
        store.push(contact(2, "B"));
        store.push(contact(1, "A"));
        let names: Vec<_> = store.slots().iter().map(|s| s.contact.full_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn replace_keeps_position_and_visibility() {
        let mut store = ContactStore::default();
        store.push(contact(1, "A"));
        store.push(contact(2, "B"));
        store.push(contact(3, "C"));
        store.slots_mut().nth(1).unwrap().hidden = true;

        assert!(store.replace(ContactId(2), contact(2, "Bee")));
        assert_eq!(store.slots()[1].contact.full_name, "Bee");
        assert!(store.slots()[1].hidden);
        assert!(!store.replace(ContactId(9), contact(9, "Z")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_by_id() {
        let mut store = ContactStore::default();
        store.push(contact(1, "A"));
        store.push(contact(2, "B"));
        assert_eq!(store.remove(ContactId(1)).map(|c| c.full_name), Some("A".into()));
        assert!(store.remove(ContactId(1)).is_none());
        assert_eq!(store.get(ContactId(2)).map(|c| c.full_name.as_str()), Some("B"));
        assert_eq!(store.visible_count(), 1);
    }
}
