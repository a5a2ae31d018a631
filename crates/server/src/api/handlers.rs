//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics::{self, TokenizeCounter};
use crate::api::models::*;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub prometheus_handle: PrometheusHandle,
    /// Number of `POST /tokenize` calls served by this process.
    pub tokenize_calls: Arc<TokenizeCounter>,
}

impl AppState {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self {
            prometheus_handle,
            tokenize_calls: Arc::new(TokenizeCounter::new()),
        }
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// `POST /tokenize`
///
/// Reads the raw text body and responds with `{"tokens": [...]}`.
pub async fn tokenize(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    state.tokenize_calls.increment();

    let body = body.map_err(|rejection| {
        tracing::warn!(method = "POST", route = "/tokenize", error = %rejection, "can't read body");
        ApiError::from(rejection)
    })?;
    if body.is_empty() {
        tracing::warn!(method = "POST", route = "/tokenize", "missing data");
        return Err(ApiError::BadRequest("missing data".into()));
    }
    // Invalid sequences become U+FFFD, which the tokenizer treats as a delimiter.
    let text = String::from_utf8_lossy(&body);

    let tokens = nlp_core::tokenize(&text);
    metrics::record_tokens(tokens.len());

    let resp = TokenizeResponse {
        tokens: tokens.into_option(),
    };
    let data = serde_json::to_vec(&resp).map_err(|e| {
        tracing::error!(method = "POST", route = "/tokenize", error = %e, "can't encode");
        ApiError::Internal("can't encode".into())
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], data).into_response())
}

/// `GET /stem/:word`
pub async fn stem(Path(word): Path<String>) -> String {
    let mut stem = nlp_core::stem(&word);
    stem.push('\n');
    stem
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// `GET /debug/vars`
pub async fn debug_vars(State(state): State<AppState>) -> Json<VarsResponse> {
    Json(VarsResponse {
        tokenize_calls: state.tokenize_calls.get(),
    })
}
