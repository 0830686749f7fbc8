//! Search input shared by the home and results pages

use crate::search::SearchMode;

/// Query box with a semantic/text toggle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    query: String,
    mode: SearchMode,
}

impl SearchBox {
    /// An empty box starting in `initial_mode`
    pub fn new(initial_mode: SearchMode) -> Self {
        Self {
            query: String::new(),
            mode: initial_mode,
        }
    }

    /// The raw, untrimmed query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected search mode
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Replace the query text
    pub fn set_query(&mut self, value: &str) {
        self.query = value.to_string();
    }

    /// Switch between semantic and text search
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Hint text for the current mode
    pub fn placeholder(&self) -> &'static str {
        match self.mode {
            SearchMode::Semantic => "Search by meaning...",
            SearchMode::Text => "Search by text...",
        }
    }

    /// The trimmed query and mode to search with, or `None` for a blank query
    pub fn submit(&self) -> Option<(String, SearchMode)> {
        let query = self.query.trim();
        if query.is_empty() {
            None
        } else {
            Some((query.to_string(), self.mode))
        }
    }
}
