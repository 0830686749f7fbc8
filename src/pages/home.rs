use log::debug;

use crate::api::PhraseApi;
use crate::components::{PhraseForm, PhraseTable, SearchBox};
use crate::error::Error;
use crate::pages::ViewState;
use crate::phrases::Phrase;
use crate::routes::Route;
use crate::store::{ListAction, PhraseList};

/// `/`: search box, recent phrases and the create/edit modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePage {
    pub search: SearchBox,
    state: ViewState<PhraseTable>,
    modal: Option<PhraseForm>,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<PhraseTable> {
        &self.state
    }

    /// The loaded table, once the list arrived
    pub fn table(&self) -> Option<&PhraseTable> {
        self.state.ready()
    }

    pub fn table_mut(&mut self) -> Option<&mut PhraseTable> {
        self.state.ready_mut()
    }

    pub fn phrases(&self) -> Option<&PhraseList> {
        self.table().map(PhraseTable::rows)
    }

    /// List the `limit` most recent phrases into the table
    pub async fn load(&mut self, api: &dyn PhraseApi, limit: u32) -> Result<(), Error> {
        self.state = ViewState::Loading;
        let result = api
            .list_phrases(limit)
            .await
            .map(|phrases| PhraseTable::new(PhraseList::from(phrases)));
        self.state.settle(result)
    }

    /// Route for the query in the search box, if it is not blank
    pub fn search(&self) -> Option<Route> {
        self.search.submit().map(|(q, mode)| Route::search(&q, mode))
    }

    pub fn modal(&self) -> Option<&PhraseForm> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut PhraseForm> {
        self.modal.as_mut()
    }

    /// Open an empty create modal
    pub fn open_create(&mut self) {
        self.modal = Some(PhraseForm::create());
    }

    /// Open the modal prefilled with a row. Unknown ids are ignored.
    pub fn open_edit(&mut self, id: &str) {
        if let Some(phrase) = self.table().and_then(|t| t.edit(id)) {
            self.modal = Some(PhraseForm::edit(&phrase));
        }
    }

    /// Close the modal and discard its draft
    pub fn close_modal(&mut self) {
        if let Some(form) = self.modal.as_mut() {
            form.close();
        }
        self.modal = None;
    }

    /// Submit the open modal; on success the list is updated and the modal closed
    pub async fn submit_modal(&mut self, api: &dyn PhraseApi) -> Result<Option<Phrase>, Error> {
        let Some(form) = self.modal.as_mut() else {
            return Ok(None);
        };
        let editing = form.is_edit();
        let Some(saved) = form.submit(api).await? else {
            return Ok(None);
        };

        if editing {
            self.on_saved(ListAction::Updated(saved.clone()));
        } else {
            self.on_saved(ListAction::Created(saved.clone()));
        }
        self.modal = None;
        Ok(Some(saved))
    }

    /// Fold a saved phrase into the list without refetching
    pub fn on_saved(&mut self, action: ListAction) {
        debug!("Applying {action:?} to home list");
        if let Some(table) = self.state.ready_mut() {
            table.rows_mut().apply(action);
        }
    }

    /// Delete a row through the table once the user confirmed
    pub async fn delete(
        &mut self,
        api: &dyn PhraseApi,
        id: &str,
        confirmed: bool,
    ) -> Option<String> {
        match self.state.ready_mut() {
            Some(table) => table.delete(api, id, confirmed).await,
            None => None,
        }
    }
}
