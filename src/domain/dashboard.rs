// Dashboard state model
use super::metrics::{Kpi, ProductMixEntry, RevenuePoint};

/// Everything produced by the most recent refresh. Replaced wholesale on
/// every cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub range: u32,
    pub revenue_series: Vec<RevenuePoint>,
    pub product_mix: Vec<ProductMixEntry>,
    pub kpis: Vec<Kpi>,
}

impl DashboardState {
    pub fn new(
        range: u32,
        revenue_series: Vec<RevenuePoint>,
        product_mix: Vec<ProductMixEntry>,
        kpis: Vec<Kpi>,
    ) -> Self {
        Self {
            range,
            revenue_series,
            product_mix,
            kpis,
        }
    }

    /// Sum of the revenue series in thousands.
    pub fn total_revenue(&self) -> i64 {
        self.revenue_series.iter().map(|p| p.value).sum()
    }
}
