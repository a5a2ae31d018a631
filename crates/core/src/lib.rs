//! # nlp-core
//!
//! Word tokenization and stemming for English text.
//!
//! This is the library crate behind `nlpd`. It has no async or HTTP
//! dependencies, so it can be embedded directly wherever text needs to be
//! normalized before indexing or matching.

/// Global configuration constants: limits and server defaults.
pub mod config;
/// Snowball English stemmer: word → stem.
pub mod stemmer;
/// Lowercasing word tokenizer with contraction stripping.
pub mod tokenizer;

pub use stemmer::stem;
pub use tokenizer::{tokenize, Tokens};
