// KPI builder - Summary cards derived from the revenue series
use crate::application::random_source::RandomSource;
use crate::domain::error::DashboardError;
use crate::domain::format::{format_currency, format_percent};
use crate::domain::metrics::{Kpi, RevenuePoint};

/// How many points back the revenue trend compares against.
const TREND_LOOKBACK: usize = 8;

const REVENUE_UNIT: f64 = 1_000.0;
const PIPELINE_UNIT: f64 = 10_000.0;

const SALES_BASELINE: f64 = 320.0;
const PIPELINE_BASELINE: f64 = 40.0;
const SATISFACTION_BASELINE: f64 = 0.75;

/// Fractional change from `prior` to `latest`; zero when `prior` is zero.
pub fn revenue_delta(latest: i64, prior: i64) -> f64 {
    if prior == 0 {
        return 0.0;
    }
    (latest - prior) as f64 / prior as f64
}

/// Builds the four KPI cards, in display order: Revenue, Sales Volume,
/// Pipeline, Customer Satisfaction.
pub fn build_kpis(
    series: &[RevenuePoint],
    rng: &mut dyn RandomSource,
) -> Result<Vec<Kpi>, DashboardError> {
    let latest = series.last().ok_or(DashboardError::EmptySeries)?.value;
    let prior = series[series.len().saturating_sub(TREND_LOOKBACK)].value;
    let delta = revenue_delta(latest, prior);

    let sales = rng.next_int(280, 430);
    let pipeline = rng.next_int(32, 55);
    // Churn is drawn but not shown; it keeps the draw order stable.
    let _churn = f64::max(0.02, rng.next_float() * 0.05);
    let satisfaction = rng.next_float() * 0.25 + 0.65;

    Ok(vec![
        Kpi::new(
            "Revenue",
            format_currency(latest as f64 * REVENUE_UNIT),
            delta,
            format_percent(delta),
        ),
        Kpi::new(
            "Sales Volume",
            format!("{} deals", sales),
            (sales as f64 - SALES_BASELINE) / SALES_BASELINE,
            format!("{} deals", sales),
        ),
        Kpi::new(
            "Pipeline",
            format_currency(pipeline as f64 * PIPELINE_UNIT),
            (pipeline as f64 - PIPELINE_BASELINE) / PIPELINE_BASELINE,
            format!("{} active", pipeline),
        ),
        Kpi::new(
            "Customer Satisfaction",
            format_percent(satisfaction),
            satisfaction - SATISFACTION_BASELINE,
            format_percent(satisfaction),
        ),
    ])
}
