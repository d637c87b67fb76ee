// File: crates/usage-core/src/night.rs
// Summary: Zeroes daytime general-supply readings so only overnight usage remains.

use chrono::{NaiveDateTime, Timelike};

use crate::sample::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NightConsumptionFilter {
    /// Hours strictly between these two bounds count as daytime.
    pub day_start_hour: u32,
    pub day_end_hour: u32,
}

impl Default for NightConsumptionFilter {
    fn default() -> Self {
        Self { day_start_hour: 6, day_end_hour: 20 }
    }
}

impl NightConsumptionFilter {
    pub const fn new(day_start_hour: u32, day_end_hour: u32) -> Self {
        Self { day_start_hour, day_end_hour }
    }

    #[inline]
    pub fn is_daytime(&self, ts: NaiveDateTime) -> bool {
        let h = ts.hour();
        h > self.day_start_hour && h < self.day_end_hour
    }

    /// Returns a new series; `off_peak` is never touched.
    pub fn apply(&self, series: &Series) -> Series {
        series
            .iter()
            .map(|s| {
                let mut s = *s;
                if self.is_daytime(s.timestamp) {
                    s.general_supply = 0.0;
                }
                s
            })
            .collect()
    }
}
