use crate::domain::payment::{ErrorEnvelope, ErrorPayload};
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Gate for the admin dashboard routes. Stands in for the host platform's
/// admin authentication, which this service does not carry.
pub async fn require_admin_api_key(
    State(expected): State<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get("X-Admin-Api-Key")
        .and_then(|h| h.to_str().ok());

    if provided != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorEnvelope {
                error: ErrorPayload {
                    code: "UNAUTHORIZED".to_string(),
                    message: "missing or invalid admin api key".to_string(),
                    details: None,
                },
            }),
        )
            .into_response();
    }

    next.run(request).await
}
