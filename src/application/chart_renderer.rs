// Chart renderers - Revenue line chart and product mix bar chart
use crate::application::drawing_surface::{DrawingSurface, LinearGradient};
use crate::domain::error::DashboardError;
use crate::domain::format::format_percent;
use crate::domain::metrics::{ProductMixEntry, RevenuePoint};

const VALUE_PADDING: f64 = 10.0;
const GUIDE_LINES: u32 = 3;
const GUIDE_COLOR: &str = "rgba(148, 163, 184, 0.4)";
const GUIDE_DASH: [f64; 2] = [4.0, 6.0];
const LINE_COLOR: &str = "#38bdf8";
const LINE_WIDTH: f64 = 3.0;
const AREA_TOP: &str = "rgba(56, 189, 248, 0.35)";
const AREA_BOTTOM: &str = "rgba(15, 23, 42, 0)";

const BAR_GUTTER: f64 = 20.0;
const BAR_RADIUS: f64 = 6.0;
const BAR_COLORS: [&str; 2] = ["#f97316", "#38bdf8"];
const LABEL_COLOR: &str = "#94a3b8";
const LABEL_FONT: &str = "12px 'Segoe UI'";
const VALUE_COLOR: &str = "#e2e8f0";
const VALUE_FONT: &str = "bold 13px 'Segoe UI'";

/// Draws the revenue trend: dashed guides, the value polyline and a gradient
/// area beneath it.
///
/// A single point is drawn as a flat line across the full width.
pub fn draw_line_chart(
    surface: &mut dyn DrawingSurface,
    series: &[RevenuePoint],
) -> Result<(), DashboardError> {
    if series.is_empty() {
        return Err(DashboardError::EmptySeries);
    }

    let width = surface.width();
    let height = surface.height();
    surface.clear_rect(0.0, 0.0, width, height);

    let min = series.iter().map(|p| p.value).min().unwrap_or_default() as f64 - VALUE_PADDING;
    let max = series.iter().map(|p| p.value).max().unwrap_or_default() as f64 + VALUE_PADDING;
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    surface.set_stroke_style(GUIDE_COLOR.into());
    surface.set_line_width(1.0);
    surface.set_line_dash(&GUIDE_DASH);
    for i in 1..=GUIDE_LINES {
        let y = height / (GUIDE_LINES + 1) as f64 * i as f64;
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(width, y);
        surface.stroke();
    }
    surface.set_line_dash(&[]);

    let to_y = |value: i64| height - ((value as f64 - min) / range) * height;

    surface.begin_path();
    if let [only] = series {
        let y = to_y(only.value);
        surface.move_to(0.0, y);
        surface.line_to(width, y);
    } else {
        let last = (series.len() - 1) as f64;
        for (index, point) in series.iter().enumerate() {
            let x = index as f64 / last * width;
            let y = to_y(point.value);
            if index == 0 {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
        }
    }

    surface.set_stroke_style(LINE_COLOR.into());
    surface.set_line_width(LINE_WIDTH);
    surface.stroke();

    let gradient = LinearGradient::new(0.0, 0.0, 0.0, height)
        .with_stop(0.0, AREA_TOP)
        .with_stop(1.0, AREA_BOTTOM);

    surface.line_to(width, height);
    surface.line_to(0.0, height);
    surface.close_path();
    surface.set_fill_style(gradient.into());
    surface.fill();

    Ok(())
}

/// Traces a closed rectangle path with quadratic corners of `radius`.
///
/// The radius is capped at half the shorter side so short bars stay convex.
pub fn trace_rounded_rect(
    surface: &mut dyn DrawingSurface,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);

    surface.begin_path();
    surface.move_to(x + r, y);
    surface.line_to(x + width - r, y);
    surface.quadratic_curve_to(x + width, y, x + width, y + r);
    surface.line_to(x + width, y + height - r);
    surface.quadratic_curve_to(x + width, y + height, x + width - r, y + height);
    surface.line_to(x + r, y + height);
    surface.quadratic_curve_to(x, y + height, x, y + height - r);
    surface.line_to(x, y + r);
    surface.quadratic_curve_to(x, y, x + r, y);
    surface.close_path();
}

/// Draws one rounded bar per product line, height proportional to its ratio,
/// labelled with the category name below and the share above.
pub fn draw_bar_chart(
    surface: &mut dyn DrawingSurface,
    mix: &[ProductMixEntry],
) -> Result<(), DashboardError> {
    if mix.is_empty() {
        return Err(DashboardError::NoCategories);
    }

    let width = surface.width();
    let height = surface.height();
    surface.clear_rect(0.0, 0.0, width, height);

    let bar_width = (width / mix.len() as f64 - BAR_GUTTER).max(0.0);

    for (index, product) in mix.iter().enumerate() {
        let x = index as f64 * (bar_width + BAR_GUTTER) + BAR_GUTTER / 2.0;
        let bar_height = product.ratio * (height - 2.0 * BAR_GUTTER);
        let y = height - bar_height - BAR_GUTTER;

        surface.set_fill_style(BAR_COLORS[index % 2].into());
        trace_rounded_rect(surface, x, y, bar_width, bar_height, BAR_RADIUS);
        surface.fill();

        surface.set_fill_style(LABEL_COLOR.into());
        surface.set_font(LABEL_FONT);
        surface.fill_text(product.label, x, height - 6.0);

        surface.set_fill_style(VALUE_COLOR.into());
        surface.set_font(VALUE_FONT);
        surface.fill_text(&format_percent(product.ratio), x, y - 8.0);
    }

    Ok(())
}
