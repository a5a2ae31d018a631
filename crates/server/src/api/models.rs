//! Response data transfer objects for the REST API.
//!
//! All types derive `Serialize` for JSON marshalling.

use serde::Serialize;

/// Response body for `POST /tokenize`.
///
/// `tokens` is `null` when the text contained no words.
#[derive(Debug, Serialize)]
pub struct TokenizeResponse {
    pub tokens: Option<Vec<String>>,
}

/// Response body for `GET /debug/vars`.
#[derive(Debug, Serialize)]
pub struct VarsResponse {
    #[serde(rename = "tokenize.calls")]
    pub tokenize_calls: u64,
}
