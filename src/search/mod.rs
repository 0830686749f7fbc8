//! Semantic and text search endpoints

use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::phrases::Phrase;

/// How a query is matched against phrases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match by meaning similarity
    #[default]
    Semantic,
    /// Match by exact or substring text
    Text,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Text => "text",
        }
    }

    /// Lenient parse used for URL parameters: anything but `text` is semantic.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("text") => Self::Text,
            _ => Self::Semantic,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semantic" => Ok(Self::Semantic),
            "text" => Ok(Self::Text),
            other => Err(Error::validation(format!("unknown search mode: {other}"))),
        }
    }
}

/// Body of a semantic search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SemanticSearchRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Client for the search endpoints
pub struct SearchClient {
    client: Client,
    options: ClientOptions,
}

impl SearchClient {
    /// Create a new SearchClient
    pub(crate) fn new(client: Client, options: ClientOptions) -> Self {
        Self { client, options }
    }

    /// Search by meaning
    pub async fn semantic(&self, data: &SemanticSearchRequest) -> Result<Vec<Phrase>, Error> {
        Fetch::post(&self.client, &self.options, "/api/search/semantic")
            .json(data)?
            .execute::<Vec<Phrase>>()
            .await
    }

    /// Search by text
    pub async fn text(&self, q: &str, limit: u32) -> Result<Vec<Phrase>, Error> {
        Fetch::get(&self.client, &self.options, &text_search_path(q, limit))
            .execute::<Vec<Phrase>>()
            .await
    }
}

fn text_search_path(q: &str, limit: u32) -> String {
    format!(
        "/api/search/text?q={}&limit={}",
        urlencoding::encode(q),
        limit
    )
}
