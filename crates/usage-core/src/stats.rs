// File: crates/usage-core/src/stats.rs
// Summary: Min/max/mean/sum of general supply, with an explicit "no data" case.

use crate::error::{ChartError, Result};
use crate::sample::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub sum: f64,
    /// `None` when the series had no samples.
    pub summary: Option<Summary>,
}

impl Stats {
    pub const fn empty() -> Self {
        Self { count: 0, sum: 0.0, summary: None }
    }

    pub fn has_data(&self) -> bool { self.summary.is_some() }

    pub fn min(&self) -> Result<f64> { self.summary.map(|s| s.min).ok_or(ChartError::EmptySeries) }
    pub fn max(&self) -> Result<f64> { self.summary.map(|s| s.max).ok_or(ChartError::EmptySeries) }
    pub fn mean(&self) -> Result<f64> { self.summary.map(|s| s.mean).ok_or(ChartError::EmptySeries) }
}

impl Default for Stats {
    fn default() -> Self { Self::empty() }
}

pub fn compute(series: &Series) -> Stats {
    let mut iter = series.iter().map(|s| s.general_supply);
    let Some(first) = iter.next() else {
        return Stats::empty();
    };
    let (mut min, mut max, mut sum, mut count) = (first, first, first, 1usize);
    for v in iter {
        min = min.min(v);
        max = max.max(v);
        sum += v;
        count += 1;
    }
    // Rounding can push the mean a hair outside [min, max] for constant series.
    let mean = (sum / count as f64).clamp(min, max);
    Stats { count, sum, summary: Some(Summary { min, max, mean }) }
}
