// Application layer - Data generation, rendering and the refresh cycle
pub mod activity_feed;
pub mod chart_renderer;
pub mod clock;
pub mod dashboard_service;
pub mod drawing_surface;
pub mod kpi_builder;
pub mod markup_renderer;
pub mod random_source;
pub mod refresh_timer;
pub mod series_builder;
