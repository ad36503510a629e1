use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use commerce_extensions::http::middleware::admin_auth::require_admin_api_key;
use tower::ServiceExt;

fn app() -> Router {
    Router::new()
        .route("/admin/ping", get(|| async { "pong" }))
        .layer(from_fn_with_state(
            "secret".to_string(),
            require_admin_api_key,
        ))
}

#[tokio::test]
async fn missing_key_is_rejected_with_an_error_envelope() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/admin/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn wrong_key_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/admin/ping")
                .header("X-Admin-Api-Key", "not-the-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn configured_key_passes_through() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/admin/ping")
                .header("X-Admin-Api-Key", "secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
