use serde::Deserialize;
use std::path::Path;

use crate::gauge::{GaugeLayout, DEFAULT_MAX, DEFAULT_MIN};
use crate::history::DEFAULT_HISTORY_POINTS;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub gauge: GaugeConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_web_address")]
    pub address: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            address: default_web_address(),
            port: default_web_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    /// JSON report to load at start-up
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GaugeConfig {
    #[serde(default = "default_gauge_min")]
    pub min: i32,
    #[serde(default = "default_gauge_max")]
    pub max: i32,
    #[serde(flatten)]
    pub layout: GaugeLayout,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            layout: GaugeLayout::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Every (re)start eases from here, not from the value on screen
    #[serde(default)]
    pub start_value: f64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            start_value: 0.0,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "default_history_points")]
    pub points: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { points: default_history_points() }
    }
}

// Default value functions
fn default_true() -> bool { true }
fn default_web_address() -> String { "127.0.0.1".to_string() }
fn default_web_port() -> u16 { 8090 }
fn default_gauge_min() -> i32 { DEFAULT_MIN }
fn default_gauge_max() -> i32 { DEFAULT_MAX }
fn default_duration_ms() -> u64 { 1800 }
fn default_frame_interval_ms() -> u64 { 16 }
fn default_history_points() -> usize { DEFAULT_HISTORY_POINTS }

impl Config {
    /// Load from TOML; a missing file means all defaults
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config '{}': {}", path, e))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.web.enabled);
        assert_eq!(config.web.port, 8090);
        assert_eq!(config.gauge.min, 300);
        assert_eq!(config.gauge.max, 900);
        assert_eq!(config.gauge.layout, GaugeLayout::default());
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.history.points, 6);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.report.path.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [logging]
            format = "json"

            [web]
            port = 9000

            [report]
            path = "report.json"

            [gauge]
            min = 350
            radius = 100.0

            [animation]
            duration_ms = 0
            start_value = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.web.port, 9000);
        assert_eq!(config.web.address, "127.0.0.1");
        assert_eq!(config.report.path.as_deref(), Some("report.json"));
        assert_eq!(config.gauge.min, 350);
        assert_eq!(config.gauge.max, 900);
        assert_eq!(config.gauge.layout.radius, 100.0);
        assert_eq!(config.gauge.layout.center_x, 120.0);
        assert_eq!(config.animation.duration_ms, 0);
        assert_eq!(config.animation.start_value, 10.0);
        assert_eq!(config.animation.frame_interval_ms, 16);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("/nonexistent/score-lens.toml").unwrap();
        assert_eq!(config.web.port, 8090);
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(Config::from_toml("[web]\nport = \"abc\"").is_err());
    }
}
