// File: crates/demo/src/config.rs
// Summary: Demo configuration: chart settings plus logging, loaded from JSON5.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use usage_core::ChartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into(), format: LogFormat::Text }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        Self::parse(&content).with_context(|| format!("loading config '{}'", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = json5::from_str(content).context("parsing JSON5")?;
        config.chart.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = AppConfig::parse("{ logging: { format: 'json' }, chart: { year: 2014 } }").unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.chart.year, 2014);
        assert_eq!(cfg.chart.national_average_kwh, 0.38);
    }

    #[test]
    fn load_reads_file_or_defaults() {
        assert_eq!(AppConfig::load(None).unwrap().chart, ChartConfig::default());
        assert!(AppConfig::load(Some(Path::new("target/test_out/no-such-config.json5"))).is_err());

        let path = std::env::temp_dir().join("usage-demo-config-test.json5");
        std::fs::write(&path, "{ chart: { initial_month: 3 }, logging: { level: 'debug' } }").unwrap();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.chart.initial_month, 3);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn invalid_chart_section_is_rejected() {
        assert!(AppConfig::parse("{ chart: { initial_month: 13 } }").is_err());
    }
}
