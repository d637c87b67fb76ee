// File: crates/usage-core/tests/hover.rs
// Purpose: Nearest-sample lookup under the pointer and the readout derived from it.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use usage_core::{
    locate, locate_date, locate_date_unordered, ChartError, DisplayDomain, HoverTracker, Layout, Sample, Series, TimeScale,
};

fn t(min: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(min)
}

fn three() -> Series {
    Series::from_samples(vec![
        Sample::new(t(0), 0.1, 0.0),
        Sample::new(t(10), 0.2, 0.0),
        Sample::new(t(20), 0.3, 0.0),
    ])
}

fn scale() -> TimeScale {
    TimeScale::new(0.0, 200.0, t(0), t(20), Duration::minutes(30))
}

#[test]
fn snaps_to_closer_neighbour() {
    let s = locate(&three(), &scale(), 70.0).unwrap();
    assert_eq!(s.timestamp, t(10));
}

#[test]
fn equidistant_pointer_prefers_earlier_sample() {
    let s = locate(&three(), &scale(), 50.0).unwrap();
    assert_eq!(s.timestamp, t(0));
}

#[test]
fn exact_hit_returns_that_sample() {
    assert_eq!(locate_date(&three(), t(20)).unwrap().timestamp, t(20));
    assert_eq!(locate_date(&three(), t(10)).unwrap().timestamp, t(10));
}

#[test]
fn pointer_outside_series_snaps_to_edges() {
    assert_eq!(locate(&three(), &scale(), -40.0).unwrap().timestamp, t(0));
    assert_eq!(locate(&three(), &scale(), 500.0).unwrap().timestamp, t(20));
}

#[test]
fn empty_series_is_out_of_range() {
    assert!(matches!(locate(&Series::new(), &scale(), 10.0), Err(ChartError::OutOfRange)));
    assert!(matches!(locate(&three(), &scale(), f32::NAN), Err(ChartError::OutOfRange)));
}

#[test]
fn readout_formats_sidebar_values() {
    let series = Series::from_samples(vec![
        Sample::new(t(0), 0.1, 0.0),
        Sample::new(t(30), 0.4567, 0.25),
        Sample::new(t(60), 0.2, 0.0),
    ]);
    let layout = Layout::default();
    let domain = DisplayDomain::from_series(&series, &layout, 1.2, Duration::minutes(30), (t(0), t(60)));
    let tracker = HoverTracker::new(0.38);

    let x = domain.focus_x.to_px(t(30));
    let r = tracker.locate(&series, &domain, x).unwrap();
    assert_eq!(r.sample.timestamp, t(30));
    assert_eq!(r.kwh_text, "0.457");
    assert_eq!(r.date_text, "01 Jan 00:30");
    assert_eq!(r.ratio_text(), "1.203");
    assert!((r.x - x).abs() < 1e-3);
    assert!(r.y_general < domain.focus_y.bottom_px);
    assert!(r.general_marker_visible(true));
    assert!(r.off_peak_marker_visible(true));
    assert!(!r.off_peak_marker_visible(false));

    let zero_off_peak = tracker.locate(&series, &domain, domain.focus_x.to_px(t(0))).unwrap();
    assert!(!zero_off_peak.off_peak_marker_visible(true));
}

#[test]
fn unordered_series_uses_full_scan() {
    // Source order with a step back, as around a daylight-saving repeat.
    let series = Series::from_samples(vec![
        Sample::new(t(0), 0.1, 0.0),
        Sample::new(t(60), 0.2, 0.0),
        Sample::new(t(30), 0.7, 0.0),
        Sample::new(t(90), 0.3, 0.0),
    ]);
    assert_eq!(locate_date_unordered(&series, t(30)).unwrap().timestamp, t(30));
    assert_eq!(locate_date_unordered(&series, t(44)).unwrap().timestamp, t(30));
    assert_eq!(locate_date_unordered(&series, t(75)).unwrap().timestamp, t(60));
    assert_eq!(locate_date_unordered(&series, t(500)).unwrap().timestamp, t(90));
    assert!(matches!(locate_date_unordered(&Series::new(), t(0)), Err(ChartError::OutOfRange)));

    let domain = DisplayDomain::from_series(&series, &Layout::default(), 1.2, Duration::minutes(30), (t(0), t(90)));
    let tracker = HoverTracker::new(0.38).with_ordered(false);
    let r = tracker.locate(&series, &domain, domain.focus_x.to_px(t(31))).unwrap();
    assert_eq!(r.sample.timestamp, t(30));
    assert_eq!(r.kwh_text, "0.700");
}
