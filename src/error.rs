//! Error type for the I/O and configuration edges of the crate.
//!
//! The numeric core (scales, regression, zoom, placement) never fails; it
//! normalizes bad input to safe defaults instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PodstatsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data row carried NaN or an infinity. `row` is 1-based, header excluded.
    #[error("row {row}: field `{field}` is not a finite number")]
    InvalidRow { row: usize, field: &'static str },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PodstatsError>;
