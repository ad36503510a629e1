use crate::domain::payment::{ErrorEnvelope, ErrorPayload, PaymentSessionData};
use crate::provider::{PaymentProvider, ProviderError};
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InitiateSessionRequest {
    pub currency_code: String,
    pub amount_minor: i64,
    #[serde(default)]
    pub data: PaymentSessionData,
}

#[derive(Debug, Deserialize)]
pub struct SessionDataRequest {
    #[serde(default)]
    pub data: PaymentSessionData,
}

#[derive(Debug, Deserialize)]
pub struct RefundSessionRequest {
    pub amount_minor: i64,
    #[serde(default)]
    pub data: PaymentSessionData,
}

pub async fn initiate(
    State(state): State<AppState>,
    Json(req): Json<InitiateSessionRequest>,
) -> impl IntoResponse {
    match state
        .provider
        .initiate_payment(&req.currency_code, req.amount_minor, req.data)
        .await
    {
        Ok(out) => (axum::http::StatusCode::OK, Json(out)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn authorize(
    State(state): State<AppState>,
    Json(req): Json<SessionDataRequest>,
) -> impl IntoResponse {
    match state.provider.authorize_payment(req.data).await {
        Ok(out) => (axum::http::StatusCode::OK, Json(out)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn capture(
    State(state): State<AppState>,
    Json(req): Json<SessionDataRequest>,
) -> impl IntoResponse {
    match state.provider.capture_payment(req.data).await {
        Ok(data) => (axum::http::StatusCode::OK, Json(data)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn cancel(
    State(state): State<AppState>,
    Json(req): Json<SessionDataRequest>,
) -> impl IntoResponse {
    match state.provider.cancel_payment(req.data).await {
        Ok(data) => (axum::http::StatusCode::OK, Json(data)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn refund(
    State(state): State<AppState>,
    Json(req): Json<RefundSessionRequest>,
) -> impl IntoResponse {
    match state.provider.refund_payment(req.amount_minor, req.data).await {
        Ok(data) => (axum::http::StatusCode::OK, Json(data)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<InitiateSessionRequest>,
) -> impl IntoResponse {
    match state
        .provider
        .update_payment(&req.currency_code, req.amount_minor, req.data)
        .await
    {
        Ok(data) => (axum::http::StatusCode::OK, Json(data)).into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn status(
    State(state): State<AppState>,
    Json(req): Json<SessionDataRequest>,
) -> impl IntoResponse {
    match state.provider.get_payment_status(&req.data).await {
        Ok(status) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({ "status": status })),
        )
            .into_response(),
        Err(err) => provider_error(err),
    }
}

pub async fn webhook(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    match state.provider.webhook_action_and_data(&payload).await {
        Ok(result) => (axum::http::StatusCode::OK, Json(result)).into_response(),
        Err(err) => provider_error(err),
    }
}

fn provider_error(err: ProviderError) -> Response {
    let (status, code) = match &err {
        ProviderError::InvalidSelection(_) => {
            (axum::http::StatusCode::BAD_REQUEST, "INVALID_SELECTION")
        }
    };
    (
        status,
        Json(ErrorEnvelope {
            error: ErrorPayload {
                code: code.to_string(),
                message: err.to_string(),
                details: None,
            },
        }),
    )
        .into_response()
}
