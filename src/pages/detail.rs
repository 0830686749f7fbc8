use crate::api::PhraseApi;
use crate::components::render;
use crate::error::Error;
use crate::pages::ViewState;
use crate::phrases::Phrase;
use crate::routes::Route;

/// `/phrases/:id`: one phrase with edit and delete actions
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseDetailPage {
    id: String,
    state: ViewState<Phrase>,
    action_error: Option<String>,
}

impl PhraseDetailPage {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: ViewState::Idle,
            action_error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ViewState<Phrase> {
        &self.state
    }

    pub fn phrase(&self) -> Option<&Phrase> {
        self.state.ready()
    }

    /// Load or delete failure to show on the page
    pub fn error(&self) -> Option<&str> {
        self.action_error.as_deref().or_else(|| self.state.error())
    }

    /// Where the edit button leads
    pub fn edit_route(&self) -> Route {
        Route::EditPhrase(self.id.clone())
    }

    /// Text of the loaded phrase, see [`render::detail`]
    pub fn render(&self) -> Option<String> {
        self.phrase().map(render::detail)
    }

    /// Fetch the phrase by id
    pub async fn load(&mut self, api: &dyn PhraseApi) -> Result<(), Error> {
        self.state = ViewState::Loading;
        let result = api.get_phrase(&self.id).await;
        self.state.settle(result)
    }

    /// Delete the phrase once the user confirmed, then go home.
    ///
    /// Returns `Ok(None)` when not confirmed; nothing is sent.
    pub async fn delete(
        &mut self,
        api: &dyn PhraseApi,
        confirmed: bool,
    ) -> Result<Option<Route>, Error> {
        if !confirmed {
            return Ok(None);
        }
        self.action_error = None;
        match api.delete_phrase(&self.id).await {
            Ok(_) => Ok(Some(Route::Home)),
            Err(e) => {
                if !e.is_unauthorized() {
                    self.action_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }
}
