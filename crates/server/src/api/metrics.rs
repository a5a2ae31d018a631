//! Prometheus metrics recording and the tokenize call counter.

use metrics::{counter, histogram};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Process-wide count of `POST /tokenize` calls.
///
/// Owned by [`AppState`](super::handlers::AppState) and shared by every
/// handler. The value is a metric only, so relaxed ordering is enough.
#[derive(Debug, Default)]
pub struct TokenizeCounter {
    calls: AtomicU64,
}

impl TokenizeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one tokenize call.
    pub fn increment(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        counter!("nlpd_tokenize_calls_total").increment(1);
    }

    /// Returns the number of calls recorded so far.
    pub fn get(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records how many tokens a single tokenize request produced.
pub fn record_tokens(count: usize) {
    histogram!("nlpd_tokens_per_request").record(count as f64);
}
