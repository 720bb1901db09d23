use thiserror::Error;

/// Failure taxonomy for everything the client does. Callers catch these at
/// the page boundary and convert them into a `Failed` view state; they are
/// never allowed to escape into rendering as a panic.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport never produced a response (DNS, refused connection, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("unexpected http status {status}")]
    Http { status: u16, detail: Option<String> },

    /// A detail endpoint had nothing for the requested slug.
    #[error("no {entity} found for slug {slug:?}")]
    NotFound { entity: &'static str, slug: String },

    /// The response arrived but was not the shape we expected.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Client-side form validation failed before any request was issued.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl FetchError {
    /// Inline human-readable text for form failures, preferring the backend's
    /// own message when one was decoded.
    pub fn inline_message(&self) -> String {
        match self {
            FetchError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                detail: None,
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
