//! nlpd-server — HTTP server for nlpd.
//!
//! Provides the REST API over the tokenizer and stemmer.
//! Text processing lives in `nlp-core`.

/// Bind address normalization.
pub mod addr;
/// REST API layer: Axum router, HTTP handlers, models, errors, metrics.
pub mod api;
