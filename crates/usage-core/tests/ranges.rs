// File: crates/usage-core/tests/ranges.rs
// Purpose: Month/week window arithmetic and selector index conversion.

use chrono::{NaiveDate, NaiveDateTime};
use usage_core::{month_range, week_range, ChartError, RangeSelector};

fn dt(y: i32, mo: u32, d: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn january_ends_half_an_hour_before_february() {
    let r = month_range(1, 2013).unwrap();
    assert_eq!(r.start, dt(2013, 1, 1, 0, 0));
    assert_eq!(r.end, dt(2013, 1, 31, 23, 30));
}

#[test]
fn february_and_december_boundaries() {
    let feb = month_range(2, 2013).unwrap();
    assert_eq!(feb.end, dt(2013, 2, 28, 23, 30));
    let leap = month_range(2, 2012).unwrap();
    assert_eq!(leap.end, dt(2012, 2, 29, 23, 30));
    let dec = month_range(12, 2013).unwrap();
    assert_eq!(dec.start, dt(2013, 12, 1, 0, 0));
    assert_eq!(dec.end, dt(2013, 12, 31, 23, 30));
}

#[test]
fn months_outside_one_to_twelve_are_rejected() {
    assert!(matches!(month_range(13, 2013), Err(ChartError::InvalidMonth(13))));
    assert!(matches!(month_range(0, 2013), Err(ChartError::InvalidMonth(0))));
    assert!(matches!(week_range(13, 2013), Err(ChartError::InvalidMonth(13))));
}

#[test]
fn week_covers_day_one_to_day_seven() {
    let w = week_range(3, 2013).unwrap();
    assert_eq!(w.start, dt(2013, 3, 1, 0, 0));
    assert_eq!(w.end, dt(2013, 3, 7, 0, 0));
    assert!(w.contains(dt(2013, 3, 6, 23, 30)));
    assert!(!w.contains(dt(2013, 3, 7, 0, 0)));
}

#[test]
fn selector_indices_are_zero_based() {
    assert_eq!(RangeSelector::month_from_selector(0).unwrap(), 1);
    assert_eq!(RangeSelector::month_from_selector(11).unwrap(), 12);
    assert!(matches!(RangeSelector::month_from_selector(12), Err(ChartError::InvalidMonth(13))));
}

#[test]
fn selector_uses_its_year() {
    let sel = RangeSelector::new(2014, chrono::Duration::minutes(30));
    assert_eq!(sel.month_range(1).unwrap().start, dt(2014, 1, 1, 0, 0));
}

#[test]
fn december_of_the_last_year_reports_instead_of_overflowing() {
    assert!(month_range(12, i32::MAX).is_err());
    assert!(week_range(1, i32::MAX).is_err());
}
