// Server-sent event stream of published dashboard views
use crate::application::dashboard_service::DashboardView;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::sync::Arc;
use tokio::sync::watch;

const EVENT_NAME: &str = "dashboard";

fn view_event(view: &DashboardView) -> Result<Event, axum::Error> {
    Event::default().event(EVENT_NAME).json_data(view)
}

/// Sends the current view immediately, then one event per refresh until the
/// publisher goes away.
pub fn dashboard_events(
    mut rx: watch::Receiver<Arc<DashboardView>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = async_stream::stream! {
        let view = rx.borrow_and_update().clone();
        yield view_event(&view);

        while rx.changed().await.is_ok() {
            let view = rx.borrow_and_update().clone();
            yield view_event(&view);
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
