use crate::api::models::{Contact, ContactId};

pub const NO_TAGS: &str = "None";
pub const PHONE_TERM: &str = "Phone Number:";
pub const EMAIL_TERM: &str = "Email:";
pub const TAGS_TERM: &str = "Tag(s):";

/// An edit or delete affordance attached to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryAction {
    pub label: &'static str,
    pub id: ContactId,
    pub path: String,
}

/// Everything a list row shows for one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub id: ContactId,
    pub name: String,
    pub details: Vec<(&'static str, String)>,
    pub edit: EntryAction,
    pub delete: EntryAction,
}

impl ContactEntry {
    fn detail(&self, term: &str) -> &str {
        self.details
            .iter()
            .find(|(t, _)| *t == term)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn phone_number(&self) -> &str {
        self.detail(PHONE_TERM)
    }

    pub fn email(&self) -> &str {
        self.detail(EMAIL_TERM)
    }

    pub fn tags_text(&self) -> &str {
        self.detail(TAGS_TERM)
    }
}

pub fn action_path(id: ContactId) -> String {
    format!("api/contacts/{id}")
}

fn tags_text(contact: &Contact) -> String {
    let tags = contact.tag_list();
    if tags.is_empty() { NO_TAGS.to_string() } else { tags.join(", ") }
}

pub fn render(contact: &Contact) -> ContactEntry {
    let path = action_path(contact.id);
    ContactEntry {
        id: contact.id,
        name: contact.full_name.clone(),
        details: vec![
            (PHONE_TERM, contact.phone_number.clone()),
            (EMAIL_TERM, contact.email.clone()),
            (TAGS_TERM, tags_text(contact)),
        ],
        edit: EntryAction { label: "Edit", id: contact.id, path: path.clone() },
        delete: EntryAction { label: "Delete", id: contact.id, path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(tags: Option<&str>) -> Contact {
        Contact {
            id: ContactId(3),
            full_name: "John Smith".into(),
            phone_number: "5551234567".into(),
            email: "john@example.com".into(),
            tags: tags.map(str::to_string),
        }
    }

    #[test]
    fn entry_reads_back_the_record() {
        let original = contact(Some("Sales,Engineering"));
        let entry = render(&original);

        assert_eq!(entry.name, original.full_name);
        assert_eq!(entry.phone_number(), original.phone_number);
        assert_eq!(entry.email(), original.email);
        assert_eq!(entry.tags_text(), "Sales, Engineering");
        let read_back: Vec<&str> = entry.tags_text().split(", ").collect();
        assert_eq!(read_back.join(","), original.tags.unwrap());
    }

    #[test]
    fn absent_tags_render_none() {
        let entry = render(&contact(None));
        assert_eq!(entry.tags_text(), NO_TAGS);
    }

    #[test]
    fn actions_carry_id_and_path() {
        let entry = render(&contact(None));
        assert_eq!(entry.edit.id, ContactId(3));
        assert_eq!(entry.edit.path, "api/contacts/3");
        assert_eq!(entry.delete.path, entry.edit.path);
        assert_eq!(entry.delete.label, "Delete");
    }
}
