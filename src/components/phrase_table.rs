//! Recent-phrases table on the home page

use log::warn;

use crate::api::PhraseApi;
use crate::phrases::Phrase;
use crate::store::{ListAction, PhraseList};

/// Expandable table of phrases with per-row edit and delete
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseTable {
    rows: PhraseList,
    expanded_id: Option<String>,
    deleting_id: Option<String>,
}

impl PhraseTable {
    pub fn new(rows: PhraseList) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// The phrases shown, newest first
    pub fn rows(&self) -> &PhraseList {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut PhraseList {
        &mut self.rows
    }

    /// Row showing its extra detail lines, if any
    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded_id.as_deref()
    }

    /// Row with a delete request in flight
    pub fn deleting_id(&self) -> Option<&str> {
        self.deleting_id.as_deref()
    }

    /// Message shown in place of the table when it has no rows
    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some("No phrases yet.")
    }

    /// Expand a row, or collapse it if it is already expanded
    pub fn toggle(&mut self, id: &str) {
        if self.expanded_id.as_deref() == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    /// The phrase to open in the edit modal
    pub fn edit(&self, id: &str) -> Option<Phrase> {
        self.rows.get(id).cloned()
    }

    /// Delete a row after the user confirmed. Returns the deleted id.
    ///
    /// A failed delete leaves the row in place and is only logged.
    pub async fn delete(
        &mut self,
        api: &dyn PhraseApi,
        id: &str,
        confirmed: bool,
    ) -> Option<String> {
        if !confirmed || self.rows.get(id).is_none() {
            return None;
        }

        self.deleting_id = Some(id.to_string());
        let result = api.delete_phrase(id).await;
        self.deleting_id = None;

        match result {
            Ok(_) => {
                self.rows.apply(ListAction::Deleted(id.to_string()));
                if self.expanded_id.as_deref() == Some(id) {
                    self.expanded_id = None;
                }
                Some(id.to_string())
            }
            Err(e) => {
                warn!("Failed to delete phrase {id}: {e}");
                None
            }
        }
    }
}
