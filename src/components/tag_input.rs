//! Tag chips entered one at a time

/// Tag entry: a text buffer plus the tags committed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    tags: Vec<String>,
    input: String,
}

impl TagInput {
    /// An input holding `tags`, deduplicated, with an empty buffer
    pub fn new(tags: Vec<String>) -> Self {
        let mut input = Self::default();
        for tag in tags {
            input.set_input(&tag);
            input.add();
        }
        input
    }

    /// Committed tags in entry order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The uncommitted text buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the text buffer
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    /// Commit the buffer as a tag. Blank input and exact duplicates are
    /// dropped. The buffer is cleared either way.
    pub fn add(&mut self) -> bool {
        let tag = self.input.trim().to_string();
        self.input.clear();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a committed tag
    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Drop every tag and the buffer
    pub fn clear(&mut self) {
        self.tags.clear();
        self.input.clear();
    }
}
