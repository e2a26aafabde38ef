mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

async fn send(uri: &str, origin: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }

    common::offline_router()
        .await
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_works() {
    let response = send("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = send("/health", None).await;

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn cross_origin_requests_allowed_from_any_origin() {
    let response = send("/health", Some("https://dashboard.example.com")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    // %FF is not valid UTF-8 once percent-decoded.
    for id in ["not-a-valid-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "%FF", "%C3%28"] {
        let response = send(&format!("/api/vcs/{}", id), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id={}", id);

        let body = body_json(response).await;
        assert!(
            body["error"].as_str().unwrap().contains("Invalid id"),
            "unexpected body: {}",
            body
        );
    }
}

#[tokio::test]
async fn readiness_reports_unreachable_store() {
    // Nothing listens on port 1; fail server selection quickly.
    let config = common::test_config_with_uri(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
        "vc_unreachable_test",
    );
    let response = common::router_for(config)
        .await
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Service unavailable");
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let response = send("/metrics", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("Missing content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = send("/api/unknown", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
