// Infrastructure layer - Configuration and host adapters
pub mod config;
pub mod event_stream;
pub mod http_response;
pub mod svg_surface;
