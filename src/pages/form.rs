use log::debug;

use crate::api::PhraseApi;
use crate::components::{FormMode, PhraseForm};
use crate::error::Error;
use crate::pages::ViewState;
use crate::phrases::Phrase;
use crate::routes::Route;

/// `/new` and `/phrases/:id/edit`
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseFormPage {
    form: PhraseForm,
    /// Load state of the phrase being edited. Create pages stay `Idle`.
    existing: ViewState<()>,
}

impl PhraseFormPage {
    pub fn create() -> Self {
        Self {
            form: PhraseForm::create(),
            existing: ViewState::Idle,
        }
    }

    pub fn edit(id: &str) -> Self {
        Self {
            form: PhraseForm::new(FormMode::Edit(id.to_string())),
            existing: ViewState::Idle,
        }
    }

    /// The page for a route, if it is a form route
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::New => Some(Self::create()),
            Route::EditPhrase(id) => Some(Self::edit(id)),
            _ => None,
        }
    }

    pub fn form(&self) -> &PhraseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PhraseForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.existing.is_loading()
    }

    /// Load failure of the edited phrase, or the last submit failure
    pub fn error(&self) -> Option<&str> {
        self.existing.error().or_else(|| self.form.error())
    }

    pub fn heading(&self) -> &'static str {
        self.form.heading()
    }

    /// Where cancel leads: home for a new phrase, back to the phrase when editing
    pub fn cancel_route(&self) -> Route {
        match self.form.mode() {
            FormMode::Create => Route::Home,
            FormMode::Edit(id) => Route::Phrase(id.clone()),
        }
    }

    /// Fetch the phrase being edited and prefill the form. No-op when creating.
    pub async fn load(&mut self, api: &dyn PhraseApi) -> Result<(), Error> {
        let FormMode::Edit(id) = self.form.mode().clone() else {
            return Ok(());
        };

        self.existing = ViewState::Loading;
        let result = api.get_phrase(&id).await.map(|phrase| {
            self.form.prefill(&phrase);
        });
        self.existing.settle(result)
    }

    /// Submit the form. On success returns the phrase page to navigate to.
    pub async fn submit(&mut self, api: &dyn PhraseApi) -> Result<Option<Route>, Error> {
        let edit_id = match self.form.mode() {
            FormMode::Edit(id) => Some(id.clone()),
            FormMode::Create => None,
        };

        let saved: Option<Phrase> = self.form.submit(api).await?;
        Ok(saved.map(|phrase| {
            let id = edit_id.unwrap_or(phrase.id);
            debug!("Navigating to saved phrase {id}");
            Route::Phrase(id)
        }))
    }
}
