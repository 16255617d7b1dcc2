// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService>,
}
