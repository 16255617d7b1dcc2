// HTTP request handlers
use crate::application::dashboard_service::DashboardView;
use crate::domain::error::DashboardError;
use crate::infrastructure::event_stream::dashboard_events;
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub days: u32,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::InvalidRange(_) | DashboardError::UnsupportedRange { .. } => {
                StatusCode::BAD_REQUEST
            }
            DashboardError::EmptySeries | DashboardError::NoCategories => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page rendered from the latest view
pub async fn index(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = &state.dashboard_service;
    let view = service.current();
    let page = render_page(&view, service.ranges()).into_string();

    match html_response(page, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Latest view as JSON
pub async fn current_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard_service.current().as_ref().clone())
}

/// Manual refresh button
pub async fn refresh_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, DashboardError> {
    let view = state.dashboard_service.refresh().await.map_err(|e| {
        tracing::error!("Manual refresh failed: {}", e);
        e
    })?;
    Ok(Json(view.as_ref().clone()))
}

/// Range selector change
pub async fn select_range(
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, DashboardError> {
    let view = state
        .dashboard_service
        .select_range(query.days)
        .await
        .map_err(|e| {
            tracing::warn!("Rejected range {}: {}", query.days, e);
            e
        })?;
    Ok(Json(view.as_ref().clone()))
}

/// Push every refreshed view to the browser
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    dashboard_events(state.dashboard_service.subscribe())
}
