//! Semleaf Rust Client Library
//!
//! A Rust client for the Semleaf phrase manager. It provides typed access to
//! the backend's REST API (auth status, phrase CRUD, search and export) and
//! the client-side view state that sits on top of it: routes, page state
//! machines, the phrase form and an id-keyed list reducer.

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod pages;
pub mod phrases;
pub mod routes;
pub mod search;
pub mod store;

use reqwest::Client;

use crate::auth::Auth;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::export::ExportClient;
use crate::phrases::PhrasesClient;
use crate::search::SearchClient;

/// The main entry point for the Semleaf client
#[derive(Debug, Clone)]
pub struct Semleaf {
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
}

impl Semleaf {
    /// Create a new Semleaf client
    ///
    /// # Example
    ///
    /// ```
    /// use semleaf::Semleaf;
    ///
    /// let semleaf = Semleaf::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(ClientOptions::default().with_base_url(base_url))
    }

    /// Create a new Semleaf client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use semleaf::{Semleaf, config::ClientOptions};
    ///
    /// let options = ClientOptions::default()
    ///     .with_base_url("http://localhost:8080")
    ///     .with_session_cookie("id=abc123");
    /// let semleaf = Semleaf::new_with_options(options);
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Self {
        Self {
            http_client: Client::new(),
            options,
        }
    }

    /// Create a client configured from `SEMLEAF_*` environment variables
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new_with_options(ClientOptions::from_env()?))
    }

    /// Auth status, logout and the login URL
    pub fn auth(&self) -> Auth {
        Auth::new(self.http_client.clone(), self.options.clone())
    }

    /// Phrase CRUD and listing
    pub fn phrases(&self) -> PhrasesClient {
        PhrasesClient::new(self.http_client.clone(), self.options.clone())
    }

    /// Semantic and text search
    pub fn search(&self) -> SearchClient {
        SearchClient::new(self.http_client.clone(), self.options.clone())
    }

    /// Collection export
    pub fn export(&self) -> ExportClient {
        ExportClient::new(self.http_client.clone(), self.options.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::api::PhraseApi;
    pub use crate::app::{App, Shell};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::phrases::Phrase;
    pub use crate::routes::Route;
    pub use crate::search::SearchMode;
    pub use crate::Semleaf;
}
