use serde::{Deserialize, Serialize};

/// Machine-readable error categories the backend attaches to rejected
/// requests, mostly seen on the form submission endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    RateLimited,
    Internal,
}

/// Structured error body. Decoding is opportunistic; endpoints that return a
/// bare status code still map onto the client-side taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
