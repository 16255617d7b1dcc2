// Series builders - Synthetic revenue walk and product mix
use crate::application::random_source::RandomSource;
use crate::domain::metrics::{ProductMixEntry, RevenuePoint};

const REVENUE_BASE: (i64, i64) = (180, 260);
const REVENUE_STEP: (i64, i64) = (-12, 15);
pub const REVENUE_FLOOR: i64 = 120;

/// Product lines and the range each line's magnitude is drawn from.
pub const PRODUCT_LINES: [(&str, i64, i64); 4] = [
    ("Subscriptions", 38, 48),
    ("Managed Ops", 22, 32),
    ("Advisory", 14, 22),
    ("Support", 8, 16),
];

/// Random walk of `days` daily revenue figures (in thousands), oldest first.
///
/// Day indices run `1..=days`. A zero-day range yields an empty series.
pub fn generate_revenue_series(days: u32, rng: &mut dyn RandomSource) -> Vec<RevenuePoint> {
    let mut series = Vec::with_capacity(days as usize);
    let mut value = rng.next_int(REVENUE_BASE.0, REVENUE_BASE.1);

    for day in 1..=days {
        value += rng.next_int(REVENUE_STEP.0, REVENUE_STEP.1);
        if value < REVENUE_FLOOR {
            value = REVENUE_FLOOR;
        }
        series.push(RevenuePoint::new(day, value));
    }

    series
}

/// Revenue share across the four product lines. Ratios sum to one.
pub fn generate_product_mix(rng: &mut dyn RandomSource) -> Vec<ProductMixEntry> {
    let values: Vec<(&'static str, i64)> = PRODUCT_LINES
        .iter()
        .map(|&(label, min, max)| (label, rng.next_int(min, max)))
        .collect();

    let total: i64 = values.iter().map(|(_, v)| v).sum();

    values
        .into_iter()
        .map(|(label, value)| {
            let ratio = if total == 0 {
                0.0
            } else {
                value as f64 / total as f64
            };
            ProductMixEntry::new(label, value, ratio)
        })
        .collect()
}
