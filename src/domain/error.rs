// Domain errors raised while building or drawing a dashboard
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("range must be at least one day, got {0}")]
    InvalidRange(u32),

    #[error("range {requested} is not one of the offered ranges {offered:?}")]
    UnsupportedRange { requested: u32, offered: Vec<u32> },

    #[error("revenue series is empty")]
    EmptySeries,

    #[error("bar chart needs at least one category")]
    NoCategories,
}
