// File: crates/usage-core/src/config.rs
// Summary: Chart configuration with defaults, JSON5 loading and validation.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::night::NightConsumptionFilter;
use crate::range::{RangeSelector, SAMPLE_INTERVAL_MINUTES};
use crate::types::LayoutConfig;

/// One reading per day is the coarsest interval the month windows make sense for.
pub const MAX_SAMPLE_INTERVAL_MINUTES: i64 = 24 * 60;
pub const MAX_PEAK_WINDOW_DAYS: i64 = 366;

/// Hours bounding the daytime window that the night filter zeroes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self { day_start_hour: 6, day_end_hour: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Year the month selector slices within.
    pub year: i32,
    /// Reference line drawn on the off-peak axis, in kWh per interval.
    pub national_average_kwh: f64,
    pub night: NightConfig,
    pub sample_interval_minutes: i64,
    /// Multiplier applied to the series maximum for the y domains.
    pub value_headroom: f64,
    /// Half-width of the default brush around the peak sample.
    pub peak_window_days: i64,
    /// Month shown after the data loads (1-based).
    pub initial_month: u32,
    pub layout: LayoutConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            year: 2013,
            national_average_kwh: 0.38,
            night: NightConfig::default(),
            sample_interval_minutes: 30,
            value_headroom: 1.2,
            peak_window_days: 1,
            initial_month: 1,
            layout: LayoutConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON5 document; missing fields take defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = json5::from_str(content)
            .map_err(|e| ChartError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=9999).contains(&self.year) {
            return Err(ChartError::Config(format!("year {} is outside 1..=9999", self.year)));
        }
        let n = &self.night;
        if n.day_start_hour > 23 || n.day_end_hour > 24 || n.day_start_hour >= n.day_end_hour {
            return Err(ChartError::Config(format!(
                "night window {}..{} is not a valid hour range",
                n.day_start_hour, n.day_end_hour
            )));
        }
        if !(self.national_average_kwh.is_finite() && self.national_average_kwh > 0.0) {
            return Err(ChartError::Config("national_average_kwh must be positive".into()));
        }
        if !(1..=MAX_SAMPLE_INTERVAL_MINUTES).contains(&self.sample_interval_minutes) {
            return Err(ChartError::Config(format!(
                "sample_interval_minutes must be within 1..={MAX_SAMPLE_INTERVAL_MINUTES}"
            )));
        }
        if !(self.value_headroom.is_finite() && self.value_headroom >= 1.0) {
            return Err(ChartError::Config("value_headroom must be at least 1.0".into()));
        }
        if !(0..=MAX_PEAK_WINDOW_DAYS).contains(&self.peak_window_days) {
            return Err(ChartError::Config(format!("peak_window_days must be within 0..={MAX_PEAK_WINDOW_DAYS}")));
        }
        if !(1..=12).contains(&self.initial_month) {
            return Err(ChartError::InvalidMonth(self.initial_month));
        }
        if self.layout.width == 0 || self.layout.height == 0 {
            return Err(ChartError::Config("layout size must be non-zero".into()));
        }
        Ok(())
    }

    /// Falls back to the export's 30 minute interval when out of range.
    pub fn sample_interval(&self) -> Duration {
        Duration::try_minutes(self.sample_interval_minutes)
            .filter(|d| *d > Duration::zero())
            .unwrap_or_else(|| Duration::minutes(SAMPLE_INTERVAL_MINUTES))
    }

    /// Falls back to one day when out of range.
    pub fn peak_window(&self) -> Duration {
        Duration::try_days(self.peak_window_days).unwrap_or_else(|| Duration::days(1))
    }

    pub fn night_filter(&self) -> NightConsumptionFilter {
        NightConsumptionFilter::new(self.night.day_start_hour, self.night.day_end_hour)
    }

    pub fn range_selector(&self) -> RangeSelector {
        RangeSelector::new(self.year, self.sample_interval())
    }
}
