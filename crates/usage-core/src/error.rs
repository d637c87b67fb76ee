// File: crates/usage-core/src/error.rs
// Summary: Error taxonomy shared by loading, windowing and interaction handlers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A row carried a malformed date or numeric field. Fatal for a load.
    #[error("row {row}: invalid {field} {value:?}: {reason}")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Month outside 1..=12.
    #[error("invalid month {0}, expected 1..=12")]
    InvalidMonth(u32),

    /// Hover lookup against a series with nothing to snap to.
    #[error("no sample in range for hover lookup")]
    OutOfRange,

    /// Min/max/mean requested from a series without samples.
    #[error("series is empty")]
    EmptySeries,

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration: {0}")]
    Config(String),
}

impl ChartError {
    pub(crate) fn parse(row: usize, field: &'static str, value: &str, reason: impl ToString) -> Self {
        ChartError::Parse { row, field, value: value.to_string(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
