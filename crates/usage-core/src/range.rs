// File: crates/usage-core/src/range.rs
// Summary: Month and week date windows used to slice the store.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{ChartError, Result};

/// Half-open `[start, end)` window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t < self.end
    }
}

/// Metering interval of the exported data.
pub const SAMPLE_INTERVAL_MINUTES: i64 = 30;

fn first_of_month(month: u32, year: i32) -> Result<NaiveDateTime> {
    if !(1..=12).contains(&month) {
        return Err(ChartError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(ChartError::InvalidMonth(month))
}

fn month_range_with(month: u32, year: i32, interval: Duration) -> Result<DateRange> {
    let start = first_of_month(month, year)?;
    let (ny, nm) = if month == 12 {
        (year.checked_add(1).ok_or(ChartError::InvalidMonth(month))?, 1)
    } else {
        (year, month + 1)
    };
    let next = first_of_month(nm, ny)?;
    Ok(DateRange { start, end: next - interval })
}

/// Whole month, ending one sampling interval before the next month begins.
pub fn month_range(month: u32, year: i32) -> Result<DateRange> {
    month_range_with(month, year, Duration::minutes(SAMPLE_INTERVAL_MINUTES))
}

/// Day 1 00:00 up to day 7 00:00 of the month.
pub fn week_range(month: u32, year: i32) -> Result<DateRange> {
    let start = first_of_month(month, year)?;
    let end = start.checked_add_signed(Duration::days(6)).ok_or(ChartError::InvalidMonth(month))?;
    Ok(DateRange { start, end })
}

/// Month/week windows bound to one data year and sampling interval.
#[derive(Clone, Copy, Debug)]
pub struct RangeSelector {
    pub year: i32,
    pub sample_interval: Duration,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self { year: 2013, sample_interval: Duration::minutes(SAMPLE_INTERVAL_MINUTES) }
    }
}

impl RangeSelector {
    pub fn new(year: i32, sample_interval: Duration) -> Self {
        Self { year, sample_interval }
    }

    pub fn month_range(&self, month: u32) -> Result<DateRange> {
        month_range_with(month, self.year, self.sample_interval)
    }

    pub fn week_range(&self, month: u32) -> Result<DateRange> {
        week_range(month, self.year)
    }

    /// Month selectors emit 0-based indices.
    pub fn month_from_selector(index: usize) -> Result<u32> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .filter(|m| (1..=12).contains(m))
            .ok_or(ChartError::InvalidMonth(u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)))
    }
}
