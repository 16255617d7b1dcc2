// Periodic refresh trigger
use crate::application::dashboard_service::DashboardService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Refreshes the dashboard every `period` for the lifetime of the process.
///
/// The first tick lands one period after start since construction already
/// performed the initial load. Ticks stay on the fixed schedule regardless of
/// how long a refresh takes; a tick that falls due mid-refresh is skipped.
pub fn spawn_refresh_timer(service: Arc<DashboardService>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            match service.refresh().await {
                Ok(view) => tracing::debug!("Timed refresh for {}-day range", view.range),
                Err(e) => tracing::error!("Timed refresh failed: {}", e),
            }
        }
    })
}
