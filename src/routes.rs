//! Client-side routes
//!
//! | Path | Route |
//! |---|---|
//! | `/` | [`Route::Home`] |
//! | `/new` | [`Route::New`] |
//! | `/phrases/:id` | [`Route::Phrase`] |
//! | `/phrases/:id/edit` | [`Route::EditPhrase`] |
//! | `/search?q=&mode=` | [`Route::Search`] |
//! | `/export` | [`Route::Export`] |
//! | `/login` | [`Route::Login`] |

use std::fmt;

use url::form_urlencoded;

use crate::search::SearchMode;

/// A page the app can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    New,
    Phrase(String),
    EditPhrase(String),
    Search { q: Option<String>, mode: SearchMode },
    Export,
    Login,
    NotFound(String),
}

impl Route {
    /// Route for a search, carrying query and mode in the URL
    pub fn search(q: &str, mode: SearchMode) -> Self {
        Route::Search {
            q: Some(q.to_string()),
            mode,
        }
    }

    /// Parse a path with optional query string
    pub fn parse(path_and_query: &str) -> Self {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path_and_query, ""),
        };
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["new"] => Route::New,
            ["phrases", id] => Route::Phrase(decode(id)),
            ["phrases", id, "edit"] => Route::EditPhrase(decode(id)),
            ["search"] => {
                let mut q = None;
                let mut mode = None;
                for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                    match key.as_ref() {
                        "q" => q = Some(value.into_owned()),
                        "mode" => mode = Some(value.into_owned()),
                        _ => {}
                    }
                }
                Route::Search {
                    q: q.filter(|q| !q.is_empty()),
                    mode: SearchMode::from_param(mode.as_deref()),
                }
            }
            ["export"] => Route::Export,
            ["login"] => Route::Login,
            _ => Route::NotFound(path_and_query.to_string()),
        }
    }

    /// Format as a path with query string
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::New => "/new".to_string(),
            Route::Phrase(id) => format!("/phrases/{}", urlencoding::encode(id)),
            Route::EditPhrase(id) => format!("/phrases/{}/edit", urlencoding::encode(id)),
            Route::Search { q: Some(q), mode } => {
                format!("/search?q={}&mode={}", urlencoding::encode(q), mode)
            }
            Route::Search { q: None, mode: SearchMode::Semantic } => "/search".to_string(),
            Route::Search { q: None, mode } => format!("/search?mode={mode}"),
            Route::Export => "/export".to_string(),
            Route::Login => "/login".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether the route is only reachable with a signed-in session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
