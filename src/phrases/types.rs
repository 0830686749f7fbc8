//! Types for phrases

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Server-assigned identifier
    pub id: String,

    /// The term or expression
    pub phrase: String,

    /// Meanings, in display order
    pub meanings: Vec<String>,

    /// Where the phrase was found
    pub source: Option<String>,

    /// Short labels, in entry order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text note
    pub memo: Option<String>,

    /// The creation time
    pub created_at: DateTime<Utc>,

    /// The update time
    pub updated_at: DateTime<Utc>,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePhraseRequest {
    pub phrase: String,
    pub meanings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Body of an update request. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePhraseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl From<CreatePhraseRequest> for UpdatePhraseRequest {
    fn from(req: CreatePhraseRequest) -> Self {
        Self {
            phrase: Some(req.phrase),
            meanings: Some(req.meanings),
            source: req.source,
            tags: Some(req.tags),
            memo: req.memo,
        }
    }
}

/// `{"ok": true}` acknowledgement returned by delete and logout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}
