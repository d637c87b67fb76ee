// File: crates/usage-core/src/scale.rs
// Summary: Date (X) and value (Y) scale transforms between data space and surface pixels.

use chrono::{DateTime, Duration, NaiveDateTime};

/// Value Y coordinate (kWh).
pub type Value = f64;

#[inline]
fn millis(t: NaiveDateTime) -> i64 {
    t.and_utc().timestamp_millis()
}

#[inline]
fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|d| d.naive_utc())
}

/// Horizontal date scale mapping `[d0, d1]` linearly onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    d0: NaiveDateTime,
    d1: NaiveDateTime,
}

impl TimeScale {
    /// A zero-width domain is widened by `min_span` so the mapping stays invertible.
    pub fn new(left_px: f32, right_px: f32, d0: NaiveDateTime, d1: NaiveDateTime, min_span: Duration) -> Self {
        let (d0, d1) = if d1 > d0 { (d0, d1) } else { (d0, d0 + min_span.max(Duration::milliseconds(1))) };
        Self { left_px, right_px, d0, d1 }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) { (self.d0, self.d1) }

    pub fn with_domain(&self, d0: NaiveDateTime, d1: NaiveDateTime) -> Self {
        let span = self.d1 - self.d0;
        Self::new(self.left_px, self.right_px, d0, d1, span)
    }

    pub fn with_range(&self, left_px: f32, right_px: f32) -> Self {
        Self { left_px, right_px, ..*self }
    }

    #[inline]
    fn span_ms(&self) -> f64 { (millis(self.d1) - millis(self.d0)).max(1) as f64 }

    #[inline]
    pub fn to_px(&self, t: NaiveDateTime) -> f32 {
        let frac = (millis(t) - millis(self.d0)) as f64 / self.span_ms();
        self.left_px + (frac * (self.right_px - self.left_px) as f64) as f32
    }

    /// Pixel to date, rounded to the millisecond. Pixels outside the range
    /// extrapolate past the domain.
    #[inline]
    pub fn invert(&self, px: f32) -> NaiveDateTime {
        let width = (self.right_px - self.left_px) as f64;
        let frac = if width.abs() < 1e-9 { 0.0 } else { (px - self.left_px) as f64 / width };
        let ms = millis(self.d0) as f64 + frac * self.span_ms();
        from_millis(ms.round() as i64).unwrap_or(if frac < 0.0 { self.d0 } else { self.d1 })
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if !(s.vmax - s.vmin).is_finite() || (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn with_range(&self, top_px: f32, bottom_px: f32) -> Self {
        Self { top_px, bottom_px, ..*self }
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
