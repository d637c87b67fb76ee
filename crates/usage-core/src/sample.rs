// File: crates/usage-core/src/sample.rs
// Summary: Half-hourly usage samples and the owned series model.
// Notes:
// - A `Series` always owns its samples. Slicing and filtering allocate a new
//   series, so a slice handed to the controller never aliases the store.

use chrono::NaiveDateTime;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Local wall-clock end of the metering interval.
    pub timestamp: NaiveDateTime,
    pub general_supply: f64,
    pub off_peak: f64,
}

impl Sample {
    pub const fn new(timestamp: NaiveDateTime, general_supply: f64, off_peak: f64) -> Self {
        Self { timestamp, general_supply, off_peak }
    }
}

/// The two entries a legend can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    GeneralSupply,
    NationalAverage,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::GeneralSupply, SeriesKind::NationalAverage];

    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::GeneralSupply => "End User Nightly Consumption",
            SeriesKind::NationalAverage => "National Average",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn as_slice(&self) -> &[Sample] { &self.samples }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }
    pub fn first(&self) -> Option<&Sample> { self.samples.first() }
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }
    pub fn into_samples(self) -> Vec<Sample> { self.samples }

    /// Earliest and latest timestamp. Computed over all samples rather than the
    /// endpoints so an unordered series still reports its true extent.
    pub fn extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.samples.first()?.timestamp;
        Some(self.samples.iter().fold((first, first), |(lo, hi), s| {
            (lo.min(s.timestamp), hi.max(s.timestamp))
        }))
    }

    /// Sample with the highest general supply; the first one wins a tie.
    pub fn peak(&self) -> Option<&Sample> {
        let mut best: Option<&Sample> = None;
        for s in &self.samples {
            match best {
                Some(b) if s.general_supply <= b.general_supply => {}
                _ => best = Some(s),
            }
        }
        best
    }

    pub fn max_general_supply(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.general_supply).reduce(f64::max)
    }

    pub fn max_off_peak(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.off_peak).reduce(f64::max)
    }

    /// True when timestamps strictly increase.
    pub fn is_sorted(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn peak_prefers_first_of_equal_maxima() {
        let s = Series::from_samples(vec![
            Sample::new(at(1), 0.5, 0.0),
            Sample::new(at(2), 0.9, 0.0),
            Sample::new(at(3), 0.9, 0.0),
        ]);
        assert_eq!(s.peak().unwrap().timestamp, at(2));
    }

    #[test]
    fn extent_of_empty_series_is_none() {
        assert!(Series::new().extent().is_none());
        assert!(Series::new().peak().is_none());
    }
}
