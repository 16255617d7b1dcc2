// Domain layer - Dashboard models with no host dependencies
pub mod activity;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod metrics;
