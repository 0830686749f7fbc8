//! Draft state shared by the phrase form page and the phrase modal

use log::debug;

use crate::api::PhraseApi;
use crate::components::TagInput;
use crate::error::Error;
use crate::phrases::{CreatePhraseRequest, Phrase, UpdatePhraseRequest};

/// Whether the form creates a new phrase or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// A validated request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreatePhraseRequest),
    Update(String, UpdatePhraseRequest),
}

impl Submission {
    pub async fn send(&self, api: &dyn PhraseApi) -> Result<Phrase, Error> {
        match self {
            Submission::Create(data) => api.create_phrase(data).await,
            Submission::Update(id, data) => api.update_phrase(id, data).await,
        }
    }
}

/// Editable phrase fields plus the in-flight and error state of a submit
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseForm {
    mode: FormMode,
    pub phrase: String,
    meanings: Vec<String>,
    pub source: String,
    pub tags: TagInput,
    pub memo: String,
    saving: bool,
    error: Option<String>,
}

impl PhraseForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            phrase: String::new(),
            meanings: vec![String::new()],
            source: String::new(),
            tags: TagInput::default(),
            memo: String::new(),
            saving: false,
            error: None,
        }
    }

    pub fn create() -> Self {
        Self::new(FormMode::Create)
    }

    /// An edit form prefilled from `phrase`
    pub fn edit(phrase: &Phrase) -> Self {
        let mut form = Self::new(FormMode::Edit(phrase.id.clone()));
        form.prefill(phrase);
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Phrase"
        } else {
            "New Phrase"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.saving, self.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update",
            (false, false) => "Create",
        }
    }

    pub fn add_meaning(&mut self) {
        self.meanings.push(String::new());
    }

    /// Remove a meaning row. The last remaining row cannot be removed.
    pub fn remove_meaning(&mut self, index: usize) {
        if self.meanings.len() > 1 && index < self.meanings.len() {
            self.meanings.remove(index);
        }
    }

    pub fn update_meaning(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.meanings.get_mut(index) {
            *slot = value.to_string();
        }
    }

    /// Replace all fields with the values of an existing phrase
    pub fn prefill(&mut self, phrase: &Phrase) {
        self.phrase = phrase.phrase.clone();
        self.meanings = if phrase.meanings.is_empty() {
            vec![String::new()]
        } else {
            phrase.meanings.clone()
        };
        self.source = phrase.source.clone().unwrap_or_default();
        self.tags = TagInput::new(phrase.tags.clone());
        self.memo = phrase.memo.clone().unwrap_or_default();
    }

    /// Clear every field and any error, keeping the mode
    pub fn reset(&mut self) {
        let mode = self.mode.clone();
        *self = Self::new(mode);
    }

    /// Dismiss the modal. The draft is discarded.
    pub fn close(&mut self) {
        self.reset();
    }

    /// Trimmed request body, or `None` when the phrase or every meaning is blank
    pub fn validate(&self) -> Option<CreatePhraseRequest> {
        let phrase = self.phrase.trim();
        let meanings: Vec<String> = self
            .meanings
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        if phrase.is_empty() || meanings.is_empty() {
            return None;
        }

        Some(CreatePhraseRequest {
            phrase: phrase.to_string(),
            meanings,
            source: non_blank(&self.source),
            tags: self.tags.tags().to_vec(),
            memo: non_blank(&self.memo),
        })
    }

    /// Validate and mark the form as saving.
    ///
    /// Returns `None` without touching state when the draft is invalid or a
    /// submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.saving {
            return None;
        }
        let data = self.validate()?;
        self.saving = true;
        self.error = None;

        Some(match &self.mode {
            FormMode::Create => Submission::Create(data),
            FormMode::Edit(id) => Submission::Update(id.clone(), data.into()),
        })
    }

    /// Record the outcome of a submit started with [`begin_submit`](Self::begin_submit).
    ///
    /// On success the form is reset. On failure the error's message is kept
    /// for display, except for `Unauthorized`, which the app shell handles.
    pub fn finish_submit(&mut self, result: Result<Phrase, Error>) -> Result<Phrase, Error> {
        self.saving = false;
        match result {
            Ok(phrase) => {
                debug!("Saved phrase {}", phrase.id);
                self.reset();
                Ok(phrase)
            }
            Err(e) => {
                if !e.is_unauthorized() {
                    self.error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Validate, send, and record the outcome. `Ok(None)` means the draft was
    /// invalid and nothing was sent.
    pub async fn submit(&mut self, api: &dyn PhraseApi) -> Result<Option<Phrase>, Error> {
        let Some(submission) = self.begin_submit() else {
            return Ok(None);
        };
        let result = submission.send(api).await;
        self.finish_submit(result).map(Some)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, Failure};
    use crate::store::tests::phrase;

    fn filled() -> PhraseForm {
        let mut form = PhraseForm::create();
        form.phrase = "  test ".to_string();
        form.update_meaning(0, " a test ");
        form
    }

    #[test]
    fn starts_with_one_blank_meaning() {
        let form = PhraseForm::create();
        assert_eq!(form.meanings(), [""]);
        assert_eq!(form.heading(), "New Phrase");
        assert_eq!(form.submit_label(), "Create");
    }

    #[test]
    fn last_meaning_cannot_be_removed() {
        let mut form = PhraseForm::create();
        form.remove_meaning(0);
        assert_eq!(form.meanings().len(), 1);

        form.add_meaning();
        form.update_meaning(1, "second");
        form.remove_meaning(0);
        assert_eq!(form.meanings(), ["second"]);
    }

    #[test]
    fn validate_requires_phrase_and_meaning() {
        let mut form = PhraseForm::create();
        assert_eq!(form.validate(), None);
        form.phrase = "word".to_string();
        assert_eq!(form.validate(), None);
        form.update_meaning(0, "   ");
        assert_eq!(form.validate(), None);
        form.update_meaning(0, "meaning");
        assert!(form.validate().is_some());
    }

    #[test]
    fn validate_trims_and_omits_blanks() {
        let mut form = filled();
        form.add_meaning();
        form.add_meaning();
        form.update_meaning(2, " second ");
        form.source = "   ".to_string();
        form.memo = " note ".to_string();

        let data = form.validate().unwrap();
        assert_eq!(data.phrase, "test");
        assert_eq!(data.meanings, vec!["a test", "second"]);
        assert_eq!(data.source, None);
        assert_eq!(data.memo, Some("note".to_string()));
    }

    #[tokio::test]
    async fn invalid_submit_makes_no_call() {
        let api = FakeApi::default();
        let mut form = PhraseForm::create();
        assert!(form.submit(&api).await.unwrap().is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn create_submit_sends_one_trimmed_request_and_resets() {
        let api = FakeApi::default();
        let mut form = filled();
        form.tags.set_input("vocab");
        form.tags.add();

        let created = form.submit(&api).await.unwrap().unwrap();
        assert_eq!(created.phrase, "test");

        let sent = api.created.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phrase, "test");
        assert_eq!(sent[0].meanings, vec!["a test"]);
        assert_eq!(sent[0].tags, vec!["vocab"]);
        assert_eq!(sent[0].source, None);
        assert_eq!(sent[0].memo, None);

        assert_eq!(form, PhraseForm::create());
    }

    #[test]
    fn saving_state_spans_the_request() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert!(matches!(submission, Submission::Create(_)));
        assert!(form.saving());
        assert_eq!(form.submit_label(), "Saving...");
        assert!(form.begin_submit().is_none());

        let _ = form.finish_submit(Err(Error::api(500, "Server error")));
        assert!(!form.saving());
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_shows_message() {
        let api = FakeApi::default();
        api.fail("create_phrase", Failure::Api(500, "Server error".to_string()));
        let mut form = filled();

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "Server error");
        assert_eq!(form.error(), Some("Server error"));
        assert_eq!(form.phrase, "  test ");
        assert!(!form.saving());
    }

    #[tokio::test]
    async fn unauthorized_is_not_shown_inline() {
        let api = FakeApi::default();
        api.fail("create_phrase", Failure::Unauthorized);
        let mut form = filled();

        let err = form.submit(&api).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn edit_submit_updates_by_id() {
        let mut existing = phrase("edit-id", "old");
        existing.source = Some("Book".to_string());
        existing.tags = vec!["tag1".to_string()];
        let api = FakeApi::with_phrases(vec![existing.clone()]);

        let mut form = PhraseForm::edit(&existing);
        assert_eq!(form.heading(), "Edit Phrase");
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.source, "Book");
        form.phrase = "updated".to_string();

        let saved = form.submit(&api).await.unwrap().unwrap();
        assert_eq!(saved.phrase, "updated");

        let updated = api.updated.lock().unwrap().clone();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, "edit-id");
        assert_eq!(updated[0].1.phrase.as_deref(), Some("updated"));
        assert_eq!(updated[0].1.tags, Some(vec!["tag1".to_string()]));
    }
}
