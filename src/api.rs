//! The backend operations the views depend on

use async_trait::async_trait;

use crate::auth::AuthStatus;
use crate::error::Error;
use crate::phrases::{Ack, CreatePhraseRequest, Phrase, UpdatePhraseRequest};
use crate::search::SemanticSearchRequest;
use crate::Semleaf;

/// Every backend call a page can make.
///
/// [`Semleaf`] implements this over HTTP. Pages only see the trait, so they
/// can be driven by an in-memory implementation as well.
#[async_trait]
pub trait PhraseApi: Send + Sync {
    /// `GET /api/auth/me`
    async fn auth_status(&self) -> Result<AuthStatus, Error>;

    /// `POST /api/auth/logout`
    async fn logout(&self) -> Result<Ack, Error>;

    /// `POST /api/phrases`
    async fn create_phrase(&self, data: &CreatePhraseRequest) -> Result<Phrase, Error>;

    /// `GET /api/phrases/:id`
    async fn get_phrase(&self, id: &str) -> Result<Phrase, Error>;

    /// `PUT /api/phrases/:id`
    async fn update_phrase(&self, id: &str, data: &UpdatePhraseRequest) -> Result<Phrase, Error>;

    /// `DELETE /api/phrases/:id`
    async fn delete_phrase(&self, id: &str) -> Result<Ack, Error>;

    /// `GET /api/phrases?limit=`, newest first
    async fn list_phrases(&self, limit: u32) -> Result<Vec<Phrase>, Error>;

    /// `POST /api/search/semantic`
    async fn semantic_search(&self, data: &SemanticSearchRequest) -> Result<Vec<Phrase>, Error>;

    /// `GET /api/search/text?q=&limit=`
    async fn text_search(&self, q: &str, limit: u32) -> Result<Vec<Phrase>, Error>;
}

#[async_trait]
impl PhraseApi for Semleaf {
    async fn auth_status(&self) -> Result<AuthStatus, Error> {
        self.auth().status().await
    }

    async fn logout(&self) -> Result<Ack, Error> {
        self.auth().logout().await
    }

    async fn create_phrase(&self, data: &CreatePhraseRequest) -> Result<Phrase, Error> {
        self.phrases().create(data).await
    }

    async fn get_phrase(&self, id: &str) -> Result<Phrase, Error> {
        self.phrases().get(id).await
    }

    async fn update_phrase(&self, id: &str, data: &UpdatePhraseRequest) -> Result<Phrase, Error> {
        self.phrases().update(id, data).await
    }

    async fn delete_phrase(&self, id: &str) -> Result<Ack, Error> {
        self.phrases().delete(id).await
    }

    async fn list_phrases(&self, limit: u32) -> Result<Vec<Phrase>, Error> {
        self.phrases().list(limit).await
    }

    async fn semantic_search(&self, data: &SemanticSearchRequest) -> Result<Vec<Phrase>, Error> {
        self.search().semantic(data).await
    }

    async fn text_search(&self, q: &str, limit: u32) -> Result<Vec<Phrase>, Error> {
        self.search().text(q, limit).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory backend for page tests

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) enum Failure {
        Unauthorized,
        Api(u16, String),
    }

    impl Failure {
        fn to_error(&self) -> Error {
            match self {
                Failure::Unauthorized => Error::Unauthorized,
                Failure::Api(status, message) => Error::api(*status, message),
            }
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub status: Mutex<Option<AuthStatus>>,
        pub phrases: Mutex<Vec<Phrase>>,
        pub failures: Mutex<HashMap<&'static str, Failure>>,
        pub calls: Mutex<Vec<String>>,
        pub created: Mutex<Vec<CreatePhraseRequest>>,
        pub updated: Mutex<Vec<(String, UpdatePhraseRequest)>>,
        pub semantic: Mutex<Vec<SemanticSearchRequest>>,
        pub text: Mutex<Vec<(String, u32)>>,
    }

    impl FakeApi {
        pub(crate) fn with_phrases(phrases: Vec<Phrase>) -> Self {
            let api = Self::default();
            *api.phrases.lock().unwrap() = phrases;
            api
        }

        pub(crate) fn signed_in(email: &str) -> Self {
            let api = Self::default();
            *api.status.lock().unwrap() = Some(AuthStatus {
                authenticated: true,
                email: Some(email.to_string()),
            });
            api
        }

        pub(crate) fn fail(&self, op: &'static str, failure: Failure) {
            self.failures.lock().unwrap().insert(op, failure);
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, op: &'static str, arg: &str) -> Result<(), Error> {
            self.calls.lock().unwrap().push(format!("{op}:{arg}"));
            match self.failures.lock().unwrap().get(op) {
                Some(failure) => Err(failure.to_error()),
                None => Ok(()),
            }
        }

        fn find(&self, id: &str) -> Result<Phrase, Error> {
            self.phrases
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| Error::api(404, "Not found"))
        }
    }

    #[async_trait]
    impl PhraseApi for FakeApi {
        async fn auth_status(&self) -> Result<AuthStatus, Error> {
            self.record("auth_status", "")?;
            Ok(self.status.lock().unwrap().clone().unwrap_or(AuthStatus {
                authenticated: false,
                email: None,
            }))
        }

        async fn logout(&self) -> Result<Ack, Error> {
            self.record("logout", "")?;
            *self.status.lock().unwrap() = None;
            Ok(Ack { ok: true })
        }

        async fn create_phrase(&self, data: &CreatePhraseRequest) -> Result<Phrase, Error> {
            self.record("create_phrase", &data.phrase)?;
            self.created.lock().unwrap().push(data.clone());
            let mut phrases = self.phrases.lock().unwrap();
            let id = format!("new-{}", phrases.len() + 1);
            let mut phrase = crate::store::tests::phrase(&id, &data.phrase);
            phrase.meanings = data.meanings.clone();
            phrase.source = data.source.clone();
            phrase.tags = data.tags.clone();
            phrase.memo = data.memo.clone();
            phrases.insert(0, phrase.clone());
            Ok(phrase)
        }

        async fn get_phrase(&self, id: &str) -> Result<Phrase, Error> {
            self.record("get_phrase", id)?;
            self.find(id)
        }

        async fn update_phrase(
            &self,
            id: &str,
            data: &UpdatePhraseRequest,
        ) -> Result<Phrase, Error> {
            self.record("update_phrase", id)?;
            self.updated.lock().unwrap().push((id.to_string(), data.clone()));
            let mut phrase = self.find(id)?;
            if let Some(text) = &data.phrase {
                phrase.phrase = text.clone();
            }
            if let Some(meanings) = &data.meanings {
                phrase.meanings = meanings.clone();
            }
            if data.source.is_some() {
                phrase.source = data.source.clone();
            }
            if let Some(tags) = &data.tags {
                phrase.tags = tags.clone();
            }
            if data.memo.is_some() {
                phrase.memo = data.memo.clone();
            }
            let mut phrases = self.phrases.lock().unwrap();
            if let Some(slot) = phrases.iter_mut().find(|p| p.id == id) {
                *slot = phrase.clone();
            }
            Ok(phrase)
        }

        async fn delete_phrase(&self, id: &str) -> Result<Ack, Error> {
            self.record("delete_phrase", id)?;
            self.phrases.lock().unwrap().retain(|p| p.id != id);
            Ok(Ack { ok: true })
        }

        async fn list_phrases(&self, limit: u32) -> Result<Vec<Phrase>, Error> {
            self.record("list_phrases", &limit.to_string())?;
            let phrases = self.phrases.lock().unwrap();
            Ok(phrases.iter().take(limit as usize).cloned().collect())
        }

        async fn semantic_search(
            &self,
            data: &SemanticSearchRequest,
        ) -> Result<Vec<Phrase>, Error> {
            self.record("semantic_search", &data.query)?;
            self.semantic.lock().unwrap().push(data.clone());
            Ok(self.phrases.lock().unwrap().clone())
        }

        async fn text_search(&self, q: &str, limit: u32) -> Result<Vec<Phrase>, Error> {
            self.record("text_search", q)?;
            self.text.lock().unwrap().push((q.to_string(), limit));
            let phrases = self.phrases.lock().unwrap();
            Ok(phrases
                .iter()
                .filter(|p| p.phrase.contains(q))
                .take(limit as usize)
                .cloned()
                .collect())
        }
    }
}
