use crate::analytics::mock::fallback_dashboard;
use crate::analytics::types::AnalyticsFilters;
use crate::analytics::window::DateWindow;
use crate::domain::payment::{ErrorEnvelope, ErrorPayload};
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub date_range: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBody {
    pub start_date: String,
    pub end_date: String,
    pub currency: Option<String>,
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> impl IntoResponse {
    let window = DateWindow::from_token(query.date_range.as_deref().unwrap_or("7d"), Utc::now());
    let filters = AnalyticsFilters {
        window,
        currency: normalize_currency(query.currency),
    };
    respond(&state, filters).await
}

pub async fn post_analytics(
    State(state): State<AppState>,
    Json(body): Json<AnalyticsBody>,
) -> impl IntoResponse {
    // Validation happens before any aggregation query is issued.
    let window = match DateWindow::from_explicit(&body.start_date, &body.end_date) {
        Ok(window) => window,
        Err(err) => {
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope {
                    error: ErrorPayload {
                        code: "INVALID_REQUEST".to_string(),
                        message: err.to_string(),
                        details: None,
                    },
                }),
            )
                .into_response()
        }
    };
    let filters = AnalyticsFilters {
        window,
        currency: normalize_currency(body.currency),
    };
    respond(&state, filters).await
}

async fn respond(state: &AppState, filters: AnalyticsFilters) -> Response {
    match state.analytics.dashboard(&filters).await {
        Ok(dashboard) => (axum::http::StatusCode::OK, Json(dashboard)).into_response(),
        Err(err) => {
            // Availability over accuracy: the dashboard gets a tagged static
            // payload instead of a 5xx.
            tracing::error!("analytics aggregation failed, serving fallback: {err:#}");
            (
                axum::http::StatusCode::OK,
                Json(fallback_dashboard(&filters.window)),
            )
                .into_response()
        }
    }
}

fn normalize_currency(raw: Option<String>) -> Option<String> {
    match raw.as_deref() {
        None | Some("") | Some("all") => None,
        Some(code) => Some(code.to_lowercase()),
    }
}
