//! Bind address handling.

use nlp_core::config::DEFAULT_HOST;

/// Expands a bare `:PORT` into `0.0.0.0:PORT`; other addresses pass through.
pub fn normalize(addr: &str) -> String {
    let addr = addr.trim();
    match addr.strip_prefix(':') {
        Some(port) => format!("{DEFAULT_HOST}:{port}"),
        None => addr.to_string(),
    }
}
