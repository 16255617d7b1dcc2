// Generated metric models: revenue series, product mix and KPI cards
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub day: u32,
    pub value: i64,
}

impl RevenuePoint {
    pub fn new(day: u32, value: i64) -> Self {
        Self { day, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMixEntry {
    pub label: &'static str,
    pub value: i64,
    pub ratio: f64,
}

impl ProductMixEntry {
    pub fn new(label: &'static str, value: i64, ratio: f64) -> Self {
        Self {
            label,
            value,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn css_class(self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub trend: f64,
    pub delta_label: String,
}

impl Kpi {
    pub fn new(label: &'static str, value: String, trend: f64, delta_label: String) -> Self {
        Self {
            label,
            value,
            trend,
            delta_label,
        }
    }

    /// A flat trend counts as up.
    pub fn direction(&self) -> TrendDirection {
        if self.trend >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}
