use serde::{Deserialize, Serialize};

use crate::domain::WebinarId;

/// The backend is inconsistent about list envelopes: some endpoints return a
/// bare array, others wrap it in `{"results": [...]}` or `{"data": [...]}`.
/// Normalization happens once, at the fetch boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Results { results: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Plain(items)
            | ListEnvelope::Results { results: items }
            | ListEnvelope::Data { data: items } => items,
        }
    }
}

/// Body for `POST /Webnar-register/`. The path misspelling is the backend's,
/// consumed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebinarRegistration {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub webinar: WebinarId,
}

/// Body for `POST /contact/client/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_timeline: String,
    pub message: String,
}

/// Acknowledgement returned by both POST endpoints. Unknown fields are
/// ignored; only the optional human-readable detail is kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionAck {
    #[serde(default)]
    pub detail: Option<String>,
}
