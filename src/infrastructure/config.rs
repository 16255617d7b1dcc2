use anyhow::ensure;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
    pub charts: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_ms: u64,
    pub default_range: u32,
    pub ranges: Vec<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub revenue: CanvasSize,
    pub product: CanvasSize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl DashboardConfig {
    fn validate(self) -> anyhow::Result<Self> {
        ensure!(self.refresh.interval_ms > 0, "refresh.interval_ms must be positive");
        ensure!(!self.refresh.ranges.is_empty(), "refresh.ranges must not be empty");
        ensure!(
            self.refresh.ranges.iter().all(|&r| r >= 1),
            "refresh.ranges must all be at least one day"
        );
        ensure!(
            self.refresh.ranges.contains(&self.refresh.default_range),
            "refresh.default_range {} is not listed in refresh.ranges",
            self.refresh.default_range
        );
        for (name, size) in [("revenue", self.charts.revenue), ("product", self.charts.product)] {
            ensure!(
                size.width > 0.0 && size.height > 0.0,
                "charts.{} must have a positive size",
                name
            );
        }
        Ok(self)
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("refresh.interval_ms", 8000)?
        .set_default("refresh.default_range", 30)?
        .set_default("refresh.ranges", vec![7, 14, 30])?
        .set_default("charts.revenue.width", 640.0)?
        .set_default("charts.revenue.height", 260.0)?
        .set_default("charts.product.width", 420.0)?
        .set_default("charts.product.height", 260.0)?)
}

/// `DASHBOARD__REFRESH__RANGES=7,30,90` style overrides.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("refresh.ranges")
        .try_parsing(true)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*`
/// environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}

#[cfg(test)]
pub(crate) fn default_config() -> DashboardConfig {
    builder()
        .and_then(|b| Ok(b.build()?))
        .and_then(|c| Ok(c.try_deserialize::<DashboardConfig>()?))
        .and_then(DashboardConfig::validate)
        .expect("defaults are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = default_config();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.refresh.interval(), Duration::from_secs(8));
        assert_eq!(config.refresh.default_range, 30);
        assert_eq!(config.refresh.ranges, vec![7, 14, 30]);
        assert_eq!(config.refresh.seed, None);
        assert_eq!(
            config.charts.revenue,
            CanvasSize {
                width: 640.0,
                height: 260.0
            }
        );
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            [refresh]
            interval_ms = 2000
            default_range = 7
            ranges = [7, 30, 90]
            seed = 42
        "#;
        let config = builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<DashboardConfig>()
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(config.refresh.interval_ms, 2000);
        assert_eq!(config.refresh.ranges, vec![7, 30, 90]);
        assert_eq!(config.refresh.seed, Some(42));
        assert_eq!(config.charts.product.width, 420.0);
    }

    #[test]
    fn test_environment_overrides() {
        let vars: config::Map<String, String> = [
            ("DASHBOARD__REFRESH__RANGES", "7,30,90"),
            ("DASHBOARD__REFRESH__DEFAULT_RANGE", "90"),
            ("DASHBOARD__REFRESH__SEED", "5"),
            ("DASHBOARD__SERVER__BIND_ADDR", "127.0.0.1:9000"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = builder()
            .unwrap()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize::<DashboardConfig>()
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(config.refresh.ranges, vec![7, 30, 90]);
        assert_eq!(config.refresh.default_range, 90);
        assert_eq!(config.refresh.seed, Some(5));
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.refresh.interval_ms, 8000);
    }

    #[test]
    fn test_default_range_must_be_offered() {
        let toml = r#"
            [refresh]
            default_range = 60
        "#;
        let result = builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<DashboardConfig>()
            .unwrap()
            .validate();

        assert!(result.is_err());
    }
}
