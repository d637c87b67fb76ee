// File: crates/usage-core/tests/config.rs
// Purpose: JSON5 configuration defaults, overrides and validation.

use usage_core::{ChartConfig, ChartError, FocusContextController, TimeSeriesStore};

#[test]
fn empty_document_yields_defaults() {
    let cfg = ChartConfig::parse("{}").unwrap();
    assert_eq!(cfg, ChartConfig::default());
    assert_eq!(cfg.year, 2013);
    assert_eq!(cfg.national_average_kwh, 0.38);
    assert_eq!(cfg.night.day_start_hour, 6);
    assert_eq!(cfg.night.day_end_hour, 20);
    assert_eq!(cfg.layout.width, 769);
}

#[test]
fn overrides_are_applied() {
    let cfg = ChartConfig::parse(
        r#"
        {
            // national figure for a different tariff year
            national_average_kwh: 0.41,
            night: { day_start_hour: 7 },
            layout: { width: 1024 },
        }
        "#,
    )
    .unwrap();
    assert_eq!(cfg.national_average_kwh, 0.41);
    assert_eq!(cfg.night.day_start_hour, 7);
    assert_eq!(cfg.night.day_end_hour, 20);
    assert_eq!(cfg.layout.width, 1024);
    assert_eq!(cfg.layout.height, 500);
    assert_eq!(cfg.night_filter().day_start_hour, 7);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(ChartConfig::parse("{ national_average_kwh: 0 }"), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::parse("{ night: { day_start_hour: 20, day_end_hour: 6 } }"), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::parse("{ value_headroom: 0.5 }"), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::parse("{ initial_month: 13 }"), Err(ChartError::InvalidMonth(13))));
    assert!(matches!(ChartConfig::parse("{ year: "), Err(ChartError::Config(_))));
}

#[test]
fn controller_refuses_invalid_config() {
    let cfg = ChartConfig { sample_interval_minutes: 0, ..ChartConfig::default() };
    assert!(FocusContextController::new(TimeSeriesStore::default(), cfg).is_err());
}

#[test]
fn oversized_durations_are_rejected() {
    assert!(matches!(ChartConfig::parse("{ peak_window_days: 1000000000 }"), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::parse("{ peak_window_days: 367 }"), Err(ChartError::Config(_))));
    assert!(matches!(
        ChartConfig::parse("{ sample_interval_minutes: 9223372036854775807 }"),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(ChartConfig::parse("{ sample_interval_minutes: 1441 }"), Err(ChartError::Config(_))));

    let widest = ChartConfig::parse("{ peak_window_days: 366, sample_interval_minutes: 1440 }").unwrap();
    assert_eq!(widest.peak_window(), chrono::Duration::days(366));
    assert_eq!(widest.sample_interval(), chrono::Duration::minutes(1440));
}

#[test]
fn unvalidated_durations_fall_back_instead_of_panicking() {
    let cfg = ChartConfig { sample_interval_minutes: i64::MAX, peak_window_days: i64::MAX, ..ChartConfig::default() };
    assert_eq!(cfg.sample_interval(), chrono::Duration::minutes(30));
    assert_eq!(cfg.peak_window(), chrono::Duration::days(1));
    assert!(FocusContextController::new(TimeSeriesStore::default(), cfg).is_err());
}

#[test]
fn year_outside_calendar_range_is_a_config_error() {
    assert!(matches!(ChartConfig::parse("{ year: 300000 }"), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::parse("{ year: 0 }"), Err(ChartError::Config(_))));
    assert_eq!(ChartConfig::parse("{ year: 2014 }").unwrap().range_selector().month_range(12).unwrap().end.format("%Y-%m-%d %H:%M").to_string(), "2014-12-31 23:30");
}

#[test]
fn widest_peak_window_renders_whole_month() {
    let csv = "\
End Datetime,General Supply KWH,Off Peak KWH
01/01/2013 00:00,0.300,0.000
05/01/2013 02:00,0.900,0.150
31/01/2013 23:00,0.200,0.100
";
    let store = TimeSeriesStore::from_reader(csv.as_bytes()).unwrap();
    let cfg = ChartConfig::parse("{ peak_window_days: 366 }").unwrap();
    let ctl = FocusContextController::with_initial_month(store, cfg).unwrap();
    let sel = ctl.selection().unwrap();
    assert_eq!((sel.start, sel.end), ctl.domain().context_extent());
}
