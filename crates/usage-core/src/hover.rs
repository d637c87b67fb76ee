// File: crates/usage-core/src/hover.rs
// Summary: Pointer-to-sample snapping and the tooltip/sidebar readout for the matched sample.

use chrono::NaiveDateTime;

use crate::error::{ChartError, Result};
use crate::sample::{Sample, Series};
use crate::scale::TimeScale;
use crate::view::DisplayDomain;

/// Sidebar date format, e.g. `07 Jan 02:30`.
pub const SIDEBAR_DATE_FORMAT: &str = "%d %b %H:%M";

/// Nearest sample to `date` by timestamp, O(log n). Ties favour the earlier
/// sample; dates outside the series snap to its first or last sample.
///
/// Requires non-decreasing timestamps. Use [`locate_date_unordered`] for
/// series kept in source order with repeats or steps back.
pub fn locate_date(series: &Series, date: NaiveDateTime) -> Result<Sample> {
    let samples = series.as_slice();
    if samples.is_empty() {
        return Err(ChartError::OutOfRange);
    }
    let i = samples.partition_point(|s| s.timestamp < date);
    let before = i.checked_sub(1).and_then(|k| samples.get(k));
    let after = samples.get(i);
    match (before, after) {
        (Some(d0), Some(d1)) => {
            Ok(if date - d0.timestamp > d1.timestamp - date { *d1 } else { *d0 })
        }
        (Some(d), None) | (None, Some(d)) => Ok(*d),
        (None, None) => Err(ChartError::OutOfRange),
    }
}

/// Nearest sample to `date` by a full scan, for series whose timestamps are
/// not sorted. Same tie rule as [`locate_date`]; among identical timestamps
/// the first in source order wins.
pub fn locate_date_unordered(series: &Series, date: NaiveDateTime) -> Result<Sample> {
    let mut best: Option<(&Sample, chrono::Duration)> = None;
    for s in series {
        let dist = (s.timestamp - date).abs();
        match best {
            Some((b, bd)) if bd < dist || (bd == dist && b.timestamp <= s.timestamp) => {}
            _ => best = Some((s, dist)),
        }
    }
    best.map(|(s, _)| *s).ok_or(ChartError::OutOfRange)
}

/// Invert `pointer_x` through `scale`, then snap to the nearest sample.
/// Same ordering requirement as [`locate_date`].
pub fn locate(series: &Series, scale: &TimeScale, pointer_x: f32) -> Result<Sample> {
    if !pointer_x.is_finite() {
        return Err(ChartError::OutOfRange);
    }
    locate_date(series, scale.invert(pointer_x))
}

/// What a tooltip and the sidebar show for the sample under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverReadout {
    pub sample: Sample,
    /// Marker x in surface pixels.
    pub x: f32,
    /// Marker y on the general-supply (left) axis.
    pub y_general: f32,
    /// Marker y on the off-peak (right) axis.
    pub y_off_peak: f32,
    pub kwh_text: String,
    pub date_text: String,
    /// General supply, as displayed, divided by the national average.
    pub times_national_average: f64,
}

impl HoverReadout {
    pub fn new(sample: Sample, domain: &DisplayDomain, national_average: f64) -> Self {
        let shown = (sample.general_supply * 1000.0).round() / 1000.0;
        let times_national_average = if national_average > 0.0 { shown / national_average } else { 0.0 };
        Self {
            sample,
            x: domain.focus_x.to_px(sample.timestamp),
            y_general: domain.focus_y.to_px(sample.general_supply),
            y_off_peak: domain.focus_y_right.to_px(sample.off_peak),
            kwh_text: format!("{:.3}", sample.general_supply),
            date_text: sample.timestamp.format(SIDEBAR_DATE_FORMAT).to_string(),
            times_national_average,
        }
    }

    pub fn ratio_text(&self) -> String {
        format!("{:.3}", self.times_national_average)
    }

    pub fn general_marker_visible(&self, series_visible: bool) -> bool {
        series_visible
    }

    /// Off-peak markers are suppressed for zero readings as well.
    pub fn off_peak_marker_visible(&self, series_visible: bool) -> bool {
        series_visible && self.sample.off_peak != 0.0
    }
}

/// Resolves pointer positions against the focus panel.
#[derive(Clone, Copy, Debug)]
pub struct HoverTracker {
    pub national_average: f64,
    /// Whether the slices handed to `locate` have sorted timestamps.
    pub ordered: bool,
}

impl HoverTracker {
    pub fn new(national_average: f64) -> Self {
        Self { national_average, ordered: true }
    }

    pub fn with_ordered(self, ordered: bool) -> Self {
        Self { ordered, ..self }
    }

    pub fn locate(&self, series: &Series, domain: &DisplayDomain, pointer_x: f32) -> Result<HoverReadout> {
        if !pointer_x.is_finite() {
            return Err(ChartError::OutOfRange);
        }
        let date = domain.focus_x.invert(pointer_x);
        let sample = if self.ordered { locate_date(series, date)? } else { locate_date_unordered(series, date)? };
        Ok(HoverReadout::new(sample, domain, self.national_average))
    }
}
