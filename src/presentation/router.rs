// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    current_dashboard, health_check, index, refresh_dashboard, select_range, stream_dashboard,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/dashboard", get(current_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .route("/dashboard/range", post(select_range))
        .route("/dashboard/stream", get(stream_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
