use crate::api::PhraseApi;
use crate::components::SearchBox;
use crate::error::Error;
use crate::pages::ViewState;
use crate::phrases::Phrase;
use crate::routes::Route;
use crate::search::{SearchMode, SemanticSearchRequest};

/// Number of results asked for by a text search
pub const TEXT_SEARCH_LIMIT: u32 = 20;

/// `/search?q=&mode=`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultsPage {
    q: Option<String>,
    mode: SearchMode,
    state: ViewState<Vec<Phrase>>,
    text_limit: u32,
    pub search: SearchBox,
}

impl SearchResultsPage {
    pub fn new(q: Option<&str>, mode: SearchMode) -> Self {
        let mut search = SearchBox::new(mode);
        if let Some(q) = q {
            search.set_query(q);
        }
        Self {
            q: q.filter(|q| !q.is_empty()).map(str::to_string),
            mode,
            state: ViewState::Idle,
            text_limit: TEXT_SEARCH_LIMIT,
            search,
        }
    }

    /// Ask text searches for `limit` results instead of the default
    pub fn with_text_limit(mut self, limit: u32) -> Self {
        self.text_limit = limit;
        self
    }

    /// The page for a route, if it is a search route
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Search { q, mode } => Some(Self::new(q.as_deref(), *mode)),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.q.as_deref()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> &ViewState<Vec<Phrase>> {
        &self.state
    }

    pub fn results(&self) -> Option<&[Phrase]> {
        self.state.ready().map(Vec::as_slice)
    }

    /// Placeholder text for the current state, if any
    pub fn status_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Loading => Some("Searching..."),
            ViewState::Failed(message) => Some(message.as_str()),
            ViewState::Ready(results) if results.is_empty() => Some("No results found."),
            _ => None,
        }
    }

    /// Run the search in the URL. A missing query sends nothing.
    pub async fn load(&mut self, api: &dyn PhraseApi) -> Result<(), Error> {
        let Some(q) = self.q.clone() else {
            return Ok(());
        };

        self.state = ViewState::Loading;
        let result = match self.mode {
            SearchMode::Semantic => api.semantic_search(&SemanticSearchRequest::new(&q)).await,
            SearchMode::Text => api.text_search(&q, self.text_limit).await,
        };
        self.state.settle(result)
    }

    /// Route for a new search from the embedded box
    pub fn search_again(&self) -> Option<Route> {
        self.search.submit().map(|(q, mode)| Route::search(&q, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, Failure};
    use crate::store::tests::phrase;

    #[tokio::test]
    async fn missing_query_sends_nothing() {
        let api = FakeApi::default();
        let mut page = SearchResultsPage::for_route(&Route::parse("/search")).unwrap();
        page.load(&api).await.unwrap();
        assert_eq!(page.state(), &ViewState::Idle);
        assert!(api.calls().is_empty());

        let mut page = SearchResultsPage::new(Some(""), SearchMode::Text);
        page.load(&api).await.unwrap();
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn semantic_sends_query_without_limit() {
        let api = FakeApi::with_phrases(vec![phrase("a", "brief")]);
        let route = Route::parse("/search?q=short%20duration&mode=semantic");
        let mut page = SearchResultsPage::for_route(&route).unwrap();
        page.load(&api).await.unwrap();

        let sent = api.semantic.lock().unwrap().clone();
        assert_eq!(sent, vec![SemanticSearchRequest::new("short duration")]);
        assert_eq!(sent[0].limit, None);
        assert_eq!(page.results().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn text_uses_default_limit() {
        let api = FakeApi::with_phrases(vec![phrase("a", "alpha"), phrase("b", "beta")]);
        let mut page = SearchResultsPage::new(Some("alp"), SearchMode::Text);
        page.load(&api).await.unwrap();

        assert_eq!(api.text.lock().unwrap().clone(), vec![("alp".to_string(), 20)]);
        assert_eq!(page.results().unwrap()[0].id, "a");

        let mut page = SearchResultsPage::new(Some("beta"), SearchMode::Text).with_text_limit(5);
        page.load(&api).await.unwrap();
        assert_eq!(api.text.lock().unwrap().last().cloned(), Some(("beta".to_string(), 5)));
    }

    #[tokio::test]
    async fn empty_results_message() {
        let api = FakeApi::default();
        let mut page = SearchResultsPage::new(Some("nothing"), SearchMode::Text);
        page.load(&api).await.unwrap();
        assert_eq!(page.status_message(), Some("No results found."));
    }

    #[tokio::test]
    async fn failure_message_is_shown() {
        let api = FakeApi::default();
        api.fail("semantic_search", Failure::Api(503, "Embedding service unavailable".to_string()));
        let mut page = SearchResultsPage::new(Some("x"), SearchMode::Semantic);
        assert!(page.load(&api).await.is_err());
        assert_eq!(page.status_message(), Some("Embedding service unavailable"));
    }

    #[test]
    fn box_starts_with_url_mode_and_searches_again() {
        let mut page = SearchResultsPage::new(Some("old"), SearchMode::Text);
        assert_eq!(page.search.mode(), SearchMode::Text);
        assert_eq!(page.search.query(), "old");

        page.search.set_query("new words");
        assert_eq!(page.search_again().unwrap().to_path(), "/search?q=new%20words&mode=text");
    }
}
