use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use nlpd_server::api::create_router;
use nlpd_server::api::handlers::AppState;
use reqwest::Client;
use tower::ServiceExt;

fn prometheus_handle() -> PrometheusHandle {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(_) => PrometheusBuilder::new().build_recorder().handle(),
    }
}

async fn spawn_app() -> String {
    let app = create_router(AppState::new(prometheus_handle()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}

fn client() -> Client {
    Client::new()
}

async fn post_tokenize(base_url: &str, body: impl Into<reqwest::Body>) -> reqwest::Response {
    client()
        .post(format!("{}/tokenize", base_url))
        .body(body)
        .send()
        .await
        .expect("Failed to send tokenize request")
}

#[tokio::test]
async fn health_returns_ok() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn tokenize_returns_tokens() {
    let base_url = spawn_app().await;

    let resp = post_tokenize(&base_url, "Who's on first?").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "tokens": ["who", "on", "first"] }));
}

#[tokio::test]
async fn tokenize_without_words_returns_null() {
    let base_url = spawn_app().await;

    let resp = post_tokenize(&base_url, "  ?! ").await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["tokens"].is_null());
}

#[tokio::test]
async fn tokenize_empty_body_is_bad_request() {
    let base_url = spawn_app().await;

    let resp = post_tokenize(&base_url, "").await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "missing data");
}

#[tokio::test]
async fn tokenize_invalid_utf8_splits_on_bad_bytes() {
    let base_url = spawn_app().await;

    let resp = post_tokenize(&base_url, b"caf\xe9 is open".to_vec()).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "tokens": ["caf", "is", "open"] }));
}

#[tokio::test]
async fn tokenize_accepts_body_at_limit() {
    let base_url = spawn_app().await;

    let text = "a".repeat(nlp_core::config::MAX_REQUEST_BODY_BYTES);
    let resp = post_tokenize(&base_url, text).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn tokenize_oversized_body_is_rejected() {
    // Driven in-process: the server may reset a socket that is still streaming.
    let app = create_router(AppState::new(prometheus_handle()));

    let text = "a ".repeat(nlp_core::config::MAX_REQUEST_BODY_BYTES / 2 + 1);
    let req = Request::post("/tokenize").body(Body::from(text)).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn tokenize_rejects_get() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/tokenize", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn stem_returns_newline_terminated_stem() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/stem/running", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert_eq!(body, format!("{}\n", nlp_core::stem("running")));
    assert_eq!(body, "run\n");
}

#[tokio::test]
async fn debug_vars_counts_tokenize_calls() {
    let base_url = spawn_app().await;

    post_tokenize(&base_url, "one").await;
    post_tokenize(&base_url, "two").await;
    post_tokenize(&base_url, "").await;

    let resp = client()
        .get(format!("{}/debug/vars", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["tokenize.calls"], 3);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    let id = resp.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/metrics", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/nope", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn concurrent_tokenize_calls_are_all_served() {
    let state = AppState::new(prometheus_handle());
    let counter = state.tokenize_calls.clone();
    let app = create_router(state);

    let handles: Vec<_> = (0..600)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let req = Request::post("/tokenize")
                    .body(Body::from(format!("request number {i}")))
                    .unwrap();
                app.oneshot(req).await.unwrap().status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(counter.get(), 600);
}
