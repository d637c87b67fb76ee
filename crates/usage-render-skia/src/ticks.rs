// File: crates/usage-render-skia/src/ticks.rs
// Summary: Axis tick placement for value and date axes.

use chrono::{Duration, NaiveDateTime};

/// Round tick values covering `[min, max]`, roughly `count` of them.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) || count == 0 {
        return vec![min];
    }
    let raw = span / count as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let err = raw / step;
    if err >= 7.07 {
        step *= 10.0;
    } else if err >= 3.16 {
        step *= 5.0;
    } else if err >= 1.41 {
        step *= 2.0;
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// `count` evenly spaced dates across `[d0, d1]`, inclusive.
pub fn date_ticks(d0: NaiveDateTime, d1: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    if count < 2 || d1 <= d0 {
        return vec![d0];
    }
    let span_ms = (d1 - d0).num_milliseconds();
    (0..count)
        .map(|i| d0 + Duration::milliseconds(span_ms * i as i64 / (count as i64 - 1)))
        .collect()
}

/// Label format suited to the visible span.
pub fn date_format(d0: NaiveDateTime, d1: NaiveDateTime) -> &'static str {
    if d1 - d0 <= Duration::days(3) { "%d %b %H:%M" } else { "%d %b" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_use_round_steps() {
        let t = nice_ticks(0.0, 1.2, 6);
        assert_eq!(t.len(), 7);
        assert!(t.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 1.2]).all(|(a, b)| (a - b).abs() < 1e-9));
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(1.0, 1.0, 6), vec![1.0]);
    }
}
