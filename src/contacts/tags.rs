pub const DEFAULT_TAGS: [&str; 3] = ["Marketing", "Sales", "Engineering"];

/// Session-wide tag names offered by both tag controls. Append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<String>,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TagVocabulary {
    pub fn push(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_defaults_in_order() {
        let vocab = TagVocabulary::default();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), DEFAULT_TAGS);
    }

    #[test]
    fn push_appends_without_dedup() {
        let mut vocab = TagVocabulary::default();
        vocab.push("Sales");
        vocab.push("Support");
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.iter().last(), Some("Support"));
    }
}
