// Dashboard service - Refresh cycle that regenerates and re-renders every panel
use crate::application::activity_feed::{ActivityFeed, sample_activity};
use crate::application::chart_renderer::{draw_bar_chart, draw_line_chart};
use crate::application::clock::Clock;
use crate::application::kpi_builder::build_kpis;
use crate::application::markup_renderer::{render_activity, render_customers, render_kpis};
use crate::application::random_source::RandomSource;
use crate::application::series_builder::{generate_product_mix, generate_revenue_series};
use crate::domain::customer::CUSTOMERS;
use crate::domain::dashboard::DashboardState;
use crate::domain::error::DashboardError;
use crate::domain::format::format_currency;
use crate::domain::metrics::{Kpi, ProductMixEntry, RevenuePoint};
use crate::infrastructure::config::{ChartSettings, RefreshSettings};
use crate::infrastructure::svg_surface::SvgSurface;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

const MIX_META: &str = "Share of revenue by service line";

/// Everything a client needs to paint the dashboard after one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub range: u32,
    pub generated_at: String,
    pub revenue_series: Vec<RevenuePoint>,
    pub product_mix: Vec<ProductMixEntry>,
    pub kpis: Vec<Kpi>,
    pub kpi_cards: String,
    pub revenue_chart: String,
    pub revenue_meta: String,
    pub product_chart: String,
    pub mix_meta: String,
    pub activity_items: String,
    pub activity_meta: String,
    pub customer_rows: String,
}

struct Engine {
    state: DashboardState,
    rng: Box<dyn RandomSource>,
}

/// Owns the dashboard state and serialises refreshes: a cycle holds the
/// engine lock from generation until the new view is published.
pub struct DashboardService {
    engine: Mutex<Engine>,
    clock: Arc<dyn Clock>,
    ranges: Vec<u32>,
    charts: ChartSettings,
    views: watch::Sender<Arc<DashboardView>>,
}

impl DashboardService {
    /// Runs the initial load with the default range.
    pub fn new(
        rng: Box<dyn RandomSource>,
        clock: Arc<dyn Clock>,
        refresh: &RefreshSettings,
        charts: ChartSettings,
    ) -> Result<Self, DashboardError> {
        let mut engine = Engine {
            state: DashboardState::default(),
            rng,
        };
        let view = run_cycle(&mut engine, refresh.default_range, clock.as_ref(), &charts)?;
        let (views, _) = watch::channel(Arc::new(view));

        Ok(Self {
            engine: Mutex::new(engine),
            clock,
            ranges: refresh.ranges.clone(),
            charts,
            views,
        })
    }

    pub fn ranges(&self) -> &[u32] {
        &self.ranges
    }

    /// The most recently published view.
    pub fn current(&self) -> Arc<DashboardView> {
        self.views.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardView>> {
        self.views.subscribe()
    }

    #[cfg(test)]
    pub async fn state(&self) -> DashboardState {
        self.engine.lock().await.state.clone()
    }

    /// Regenerates everything for the currently selected range.
    pub async fn refresh(&self) -> Result<Arc<DashboardView>, DashboardError> {
        let mut engine = self.engine.lock().await;
        let range = engine.state.range;
        self.refresh_locked(&mut engine, range)
    }

    /// Switches to `days` and regenerates. Ranges not offered by the
    /// dashboard are rejected and leave the current state untouched.
    pub async fn select_range(&self, days: u32) -> Result<Arc<DashboardView>, DashboardError> {
        if days < 1 {
            return Err(DashboardError::InvalidRange(days));
        }
        if !self.ranges.contains(&days) {
            return Err(DashboardError::UnsupportedRange {
                requested: days,
                offered: self.ranges.clone(),
            });
        }

        let mut engine = self.engine.lock().await;
        if engine.state.range != days {
            tracing::info!("Range changed from {} to {} days", engine.state.range, days);
        }
        self.refresh_locked(&mut engine, days)
    }

    fn refresh_locked(
        &self,
        engine: &mut Engine,
        range: u32,
    ) -> Result<Arc<DashboardView>, DashboardError> {
        let view = Arc::new(run_cycle(engine, range, self.clock.as_ref(), &self.charts)?);
        self.views.send_replace(view.clone());
        Ok(view)
    }
}

/// One full refresh. The engine state is only replaced once every panel has
/// rendered.
fn run_cycle(
    engine: &mut Engine,
    range: u32,
    clock: &dyn Clock,
    charts: &ChartSettings,
) -> Result<DashboardView, DashboardError> {
    if range < 1 {
        return Err(DashboardError::InvalidRange(range));
    }

    let rng = &mut *engine.rng;
    let revenue_series = generate_revenue_series(range, rng);
    let product_mix = generate_product_mix(rng);
    let kpis = build_kpis(&revenue_series, rng)?;
    let state = DashboardState::new(range, revenue_series, product_mix, kpis);

    let feed = sample_activity(rng, clock);
    let view = render_view(&state, &feed, charts, clock)?;

    tracing::debug!(
        range,
        points = state.revenue_series.len(),
        total = state.total_revenue(),
        "Dashboard refreshed"
    );

    engine.state = state;
    Ok(view)
}

fn render_view(
    state: &DashboardState,
    feed: &ActivityFeed,
    charts: &ChartSettings,
    clock: &dyn Clock,
) -> Result<DashboardView, DashboardError> {
    let mut revenue = SvgSurface::new("revenueChart", charts.revenue.width, charts.revenue.height);
    draw_line_chart(&mut revenue, &state.revenue_series)?;

    let mut product = SvgSurface::new("productChart", charts.product.width, charts.product.height);
    draw_bar_chart(&mut product, &state.product_mix)?;

    Ok(DashboardView {
        range: state.range,
        generated_at: clock.now().to_rfc3339(),
        revenue_series: state.revenue_series.clone(),
        product_mix: state.product_mix.clone(),
        kpis: state.kpis.clone(),
        kpi_cards: render_kpis(&state.kpis).into_string(),
        revenue_chart: revenue.into_svg(),
        revenue_meta: format!(
            "{} {}-day total",
            format_currency(state.total_revenue() as f64 * 1000.0),
            state.range
        ),
        product_chart: product.into_svg(),
        mix_meta: MIX_META.to_string(),
        activity_items: render_activity(feed).into_string(),
        activity_meta: feed.updated.clone(),
        customer_rows: render_customers(&CUSTOMERS).into_string(),
    })
}
