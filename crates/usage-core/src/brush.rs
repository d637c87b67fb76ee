// File: crates/usage-core/src/brush.rs
// Summary: Brush selection model, day snapping and the peak-day default window.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::sample::Series;

/// Non-empty date window over the context panel. `start < end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Selection {
    /// Endpoints may be given in either order; an empty window yields `None`.
    pub fn new(a: NaiveDateTime, b: NaiveDateTime) -> Option<Self> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        (start < end).then_some(Self { start, end })
    }

    pub fn duration(&self) -> Duration { self.end - self.start }

    /// Intersect with `[lo, hi]`.
    pub fn clamp_to(&self, lo: NaiveDateTime, hi: NaiveDateTime) -> Option<Self> {
        Self::new(self.start.clamp(lo, hi), self.end.clamp(lo, hi))
    }
}

/// Local midnight at or before `t`.
pub fn day_floor(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// Local midnight at or after `t`; a midnight maps to itself.
pub fn day_ceil(t: NaiveDateTime) -> NaiveDateTime {
    let floor = day_floor(t);
    if floor == t { t } else { floor + Duration::days(1) }
}

/// Nearest midnight; exactly noon goes to the following midnight.
pub fn day_round(t: NaiveDateTime) -> NaiveDateTime {
    let floor = day_floor(t);
    let next = floor + Duration::days(1);
    if t - floor < next - t { floor } else { next }
}

/// Round both ends to day boundaries. When both ends round onto the same
/// midnight, widen to the surrounding days instead.
pub fn snap_to_days(sel: Selection) -> Selection {
    let (s, e) = (day_round(sel.start), day_round(sel.end));
    if s < e {
        return Selection { start: s, end: e };
    }
    let (s, e) = (day_floor(sel.start), day_ceil(sel.end));
    Selection::new(s, e).unwrap_or(Selection { start: s, end: s + Duration::days(1) })
}

/// `[peak - window, peak + window]` clamped to the series extent. A window
/// reaching past the representable dates saturates at the extent.
pub fn peak_selection(series: &Series, window: Duration) -> Option<Selection> {
    let peak = series.peak()?;
    let (lo, hi) = series.extent()?;
    let start = peak.timestamp.checked_sub_signed(window).unwrap_or(lo);
    let end = peak.timestamp.checked_add_signed(window).unwrap_or(hi);
    Selection::new(start, end)?.clamp_to(lo, hi)
}
