// File: crates/usage-core/src/store.rs
// Summary: Validated load of metering rows and date-range queries over the full series.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{ChartError, Result};
use crate::sample::{Sample, Series};

/// Format of the `End Datetime` column, e.g. `31/01/2013 23:30`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// One untyped row as exported by the meter; every field is still text.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "End Datetime")]
    pub end_datetime: String,
    #[serde(rename = "General Supply KWH")]
    pub general_supply_kwh: String,
    #[serde(rename = "Off Peak KWH")]
    pub off_peak_kwh: String,
}

impl RawRow {
    pub fn new(end_datetime: impl Into<String>, general_supply_kwh: impl Into<String>, off_peak_kwh: impl Into<String>) -> Self {
        Self {
            end_datetime: end_datetime.into(),
            general_supply_kwh: general_supply_kwh.into(),
            off_peak_kwh: off_peak_kwh.into(),
        }
    }

    /// Validate into a typed sample. `row` is 1-based and only used for errors.
    pub fn parse(&self, row: usize) -> Result<Sample> {
        let raw = self.end_datetime.trim();
        let timestamp = NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
            .map_err(|e| ChartError::parse(row, "End Datetime", raw, e))?;
        let general_supply = parse_kwh(row, "General Supply KWH", &self.general_supply_kwh)?;
        let off_peak = parse_kwh(row, "Off Peak KWH", &self.off_peak_kwh)?;
        Ok(Sample { timestamp, general_supply, off_peak })
    }
}

fn parse_kwh(row: usize, field: &'static str, raw: &str) -> Result<f64> {
    let s = raw.trim();
    let v: f64 = s.parse().map_err(|e| ChartError::parse(row, field, s, e))?;
    if !v.is_finite() {
        return Err(ChartError::parse(row, field, s, "not a finite number"));
    }
    if v < 0.0 {
        return Err(ChartError::parse(row, field, s, "negative reading"));
    }
    Ok(v)
}

/// Owns the full parsed dataset for the session.
#[derive(Clone, Debug, Default)]
pub struct TimeSeriesStore {
    series: Series,
    ordered: bool,
}

impl TimeSeriesStore {
    /// Parse every row or nothing: the first bad row aborts the load.
    pub fn load<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut samples: Vec<Sample> = Vec::new();
        let mut ordered = true;
        for (i, raw) in rows.into_iter().enumerate() {
            let sample = raw.parse(i + 1)?;
            if let Some(prev) = samples.last() {
                if sample.timestamp <= prev.timestamp {
                    if ordered {
                        warn!(row = i + 1, prev = %prev.timestamp, at = %sample.timestamp, "timestamp does not increase; keeping source order");
                    }
                    ordered = false;
                }
            }
            samples.push(sample);
        }
        let store = Self { series: Series::from_samples(samples), ordered };
        match store.series.extent() {
            Some((start, end)) => info!(samples = store.series.len(), %start, %end, ordered, "loaded usage data"),
            None => info!("loaded empty usage data"),
        }
        Ok(store)
    }

    /// Read a headed CSV export.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let rows = rdr.deserialize::<RawRow>().collect::<std::result::Result<Vec<_>, _>>()?;
        Self::load(rows)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn len(&self) -> usize { self.series.len() }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }
    pub fn is_ordered(&self) -> bool { self.ordered }
    pub fn extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> { self.series.extent() }

    /// Samples with `start <= t < end`, in source order, as a fresh series.
    pub fn query_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Series {
        if end <= start {
            return Series::new();
        }
        let all = self.series.as_slice();
        if self.ordered {
            let lo = all.partition_point(|s| s.timestamp < start);
            let hi = all.partition_point(|s| s.timestamp < end);
            Series::from_samples(all[lo..hi].to_vec())
        } else {
            all.iter().filter(|s| s.timestamp >= start && s.timestamp < end).copied().collect()
        }
    }
}
