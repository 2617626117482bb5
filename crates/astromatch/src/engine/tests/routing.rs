use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::engine;
use crate::engine::match_router;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn post_match(payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/match")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("build request")
}

#[tokio::test]
async fn match_route_scores_a_pairing() {
    let router = match_router(Arc::new(engine()));

    let payload = json!({
        "a": { "solar": "aquarius", "animal": "monkey" },
        "b": { "solar": "gemini", "animal": "rat" }
    });
    let response = router.oneshot(post_match(&payload)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("score").and_then(Value::as_u64), Some(94));
    assert_eq!(
        body.get("label").and_then(Value::as_str),
        Some("soulmate")
    );
    assert!(body
        .get("breakdown")
        .and_then(|breakdown| breakdown.get("adjustments"))
        .and_then(Value::as_array)
        .is_some_and(|adjustments| !adjustments.is_empty()));
}

#[tokio::test]
async fn match_route_accepts_an_explicit_context() {
    let router = match_router(Arc::new(engine()));

    let payload = json!({
        "a": { "solar": "aries", "animal": "rat" },
        "b": { "solar": "libra", "animal": "horse" },
        "context": "platonic"
    });
    let response = router.oneshot(post_match(&payload)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("score").and_then(Value::as_u64), Some(80));
}

#[tokio::test]
async fn match_route_rejects_unknown_signs() {
    let router = match_router(Arc::new(engine()));

    let payload = json!({
        "a": { "solar": "ophiuchus", "animal": "monkey" },
        "b": { "solar": "gemini", "animal": "rat" }
    });
    let response = router.oneshot(post_match(&payload)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
