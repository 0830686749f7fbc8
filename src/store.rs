//! Id-keyed phrase list kept in step with server responses
//!
//! Views do not re-fetch after a mutation. They apply the server's response
//! to their local list instead: insert at the head on create, replace by id
//! on update, remove by id on delete.

use crate::phrases::Phrase;

/// A change to apply to a [`PhraseList`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// The server created this phrase
    Created(Phrase),
    /// The server returned this phrase after an update
    Updated(Phrase),
    /// The server deleted the phrase with this id
    Deleted(String),
}

/// Ordered list of phrases with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseList {
    items: Vec<Phrase>,
}

impl PhraseList {
    /// Apply a server response to the list
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Created(phrase) => match self.position(&phrase.id) {
                Some(i) => self.items[i] = phrase,
                None => self.items.insert(0, phrase),
            },
            ListAction::Updated(phrase) => {
                if let Some(i) = self.position(&phrase.id) {
                    self.items[i] = phrase;
                }
            }
            ListAction::Deleted(id) => self.items.retain(|p| p.id != id),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Phrase> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phrase> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Phrase] {
        &self.items
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}

impl From<Vec<Phrase>> for PhraseList {
    /// Later duplicates of an id are dropped.
    fn from(phrases: Vec<Phrase>) -> Self {
        let mut items: Vec<Phrase> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if !items.iter().any(|p| p.id == phrase.id) {
                items.push(phrase);
            }
        }
        Self { items }
    }
}

impl<'a> IntoIterator for &'a PhraseList {
    type Item = &'a Phrase;
    type IntoIter = std::slice::Iter<'a, Phrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
