//! Phrase CRUD endpoints

mod types;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

const PHRASES_PATH: &str = "/api/phrases";

/// Client for the phrase collection
pub struct PhrasesClient {
    client: Client,
    options: ClientOptions,
}

impl PhrasesClient {
    /// Create a new PhrasesClient
    pub(crate) fn new(client: Client, options: ClientOptions) -> Self {
        Self { client, options }
    }

    fn phrase_path(id: &str) -> String {
        format!("{}/{}", PHRASES_PATH, urlencoding::encode(id))
    }

    /// Create a phrase. The server assigns the id and timestamps.
    pub async fn create(&self, data: &CreatePhraseRequest) -> Result<Phrase, Error> {
        Fetch::post(&self.client, &self.options, PHRASES_PATH)
            .json(data)?
            .execute::<Phrase>()
            .await
    }

    /// Fetch a single phrase
    pub async fn get(&self, id: &str) -> Result<Phrase, Error> {
        Fetch::get(&self.client, &self.options, &Self::phrase_path(id))
            .execute::<Phrase>()
            .await
    }

    /// Update a phrase in place
    pub async fn update(&self, id: &str, data: &UpdatePhraseRequest) -> Result<Phrase, Error> {
        Fetch::put(&self.client, &self.options, &Self::phrase_path(id))
            .json(data)?
            .execute::<Phrase>()
            .await
    }

    /// Delete a phrase
    pub async fn delete(&self, id: &str) -> Result<Ack, Error> {
        Fetch::delete(&self.client, &self.options, &Self::phrase_path(id))
            .execute::<Ack>()
            .await
    }

    /// List recent phrases, at most `limit` of them
    pub async fn list(&self, limit: u32) -> Result<Vec<Phrase>, Error> {
        let path = format!("{}?limit={}", PHRASES_PATH, limit);
        Fetch::get(&self.client, &self.options, &path)
            .execute::<Vec<Phrase>>()
            .await
    }
}
