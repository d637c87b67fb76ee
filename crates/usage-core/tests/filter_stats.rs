// File: crates/usage-core/tests/filter_stats.rs
// Purpose: Night filter semantics and summary statistics.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use usage_core::{stats, ChartError, NightConsumptionFilter, Sample, Series};

fn day_of_samples() -> Series {
    let t0: NaiveDateTime = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (0..48)
        .map(|i| Sample::new(t0 + Duration::minutes(30 * i), 0.1 + i as f64 * 0.01, (i % 3) as f64 * 0.2))
        .collect()
}

#[test]
fn daytime_general_supply_is_zeroed() {
    let input = day_of_samples();
    let filter = NightConsumptionFilter::default();
    let out = filter.apply(&input);
    assert_eq!(out.len(), input.len());
    for (before, after) in input.iter().zip(out.iter()) {
        assert_eq!(before.timestamp, after.timestamp);
        assert_eq!(before.off_peak, after.off_peak);
        let h = chrono::Timelike::hour(&after.timestamp);
        if h > 6 && h < 20 {
            assert_eq!(after.general_supply, 0.0, "hour {h} should be zeroed");
        } else {
            assert_eq!(after.general_supply, before.general_supply, "hour {h} should be kept");
        }
    }
}

#[test]
fn boundary_hours_are_night() {
    let filter = NightConsumptionFilter::default();
    let d = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
    assert!(!filter.is_daytime(d.and_hms_opt(6, 30, 0).unwrap()));
    assert!(filter.is_daytime(d.and_hms_opt(7, 0, 0).unwrap()));
    assert!(filter.is_daytime(d.and_hms_opt(19, 30, 0).unwrap()));
    assert!(!filter.is_daytime(d.and_hms_opt(20, 0, 0).unwrap()));
}

#[test]
fn filter_is_idempotent_and_pure() {
    let input = day_of_samples();
    let filter = NightConsumptionFilter::default();
    let once = filter.apply(&input);
    let twice = filter.apply(&once);
    assert_eq!(once, twice);
    assert_eq!(input, day_of_samples());
}

#[test]
fn stats_over_non_empty_series() {
    let series = NightConsumptionFilter::default().apply(&day_of_samples());
    let st = stats::compute(&series);
    let expected: f64 = series.iter().map(|s| s.general_supply).sum();
    assert!((st.sum - expected).abs() < 1e-12);
    assert_eq!(st.count, 48);
    let (min, mean, max) = (st.min().unwrap(), st.mean().unwrap(), st.max().unwrap());
    assert!(min <= mean && mean <= max);
    assert_eq!(min, 0.0);
    assert!((max - 0.57).abs() < 1e-12);
}

#[test]
fn stats_over_empty_series_report_no_data() {
    let st = stats::compute(&Series::new());
    assert_eq!(st.sum, 0.0);
    assert!(!st.has_data());
    assert!(matches!(st.min(), Err(ChartError::EmptySeries)));
    assert!(matches!(st.mean(), Err(ChartError::EmptySeries)));
    assert!(matches!(st.max(), Err(ChartError::EmptySeries)));
}
