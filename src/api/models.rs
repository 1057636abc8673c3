use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact record as the backend returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub tags: Option<String>,
}

impl Contact {
    /// Tag names carried by the comma-joined `tags` field.
    pub fn tag_list(&self) -> Vec<&str> {
        match self.tags.as_deref() {
            Some(tags) => tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Body sent with POST and PUT.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub tags: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_tags_decode_as_none() {
        let with_null: Contact = serde_json::from_str(
            r#"{"id":4,"full_name":"Ann","phone_number":"1234567890","email":"a@b.c","tags":null}"#,
        )
        .unwrap();
        let missing: Contact = serde_json::from_str(
            r#"{"id":5,"full_name":"Bo","phone_number":"1234567890","email":"b@b.c"}"#,
        )
        .unwrap();
        assert_eq!(with_null.tags, None);
        assert_eq!(missing.tags, None);
        assert_eq!(with_null.id, ContactId(4));
    }

    #[test]
    fn tag_list_splits_and_trims() {
        let contact = Contact {
            id: ContactId(1),
            full_name: "Ann".into(),
            phone_number: "1234567890".into(),
            email: "a@b.c".into(),
            tags: Some("Sales, Marketing,,Engineering".into()),
        };
        assert_eq!(contact.tag_list(), vec!["Sales", "Marketing", "Engineering"]);
    }
}
