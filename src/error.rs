//! Unified error hierarchy for diaryrs
//!
//! Every failure is a validation error raised synchronously while the input
//! parameters are constructed; generation never starts on invalid input and
//! no partial artifact is written.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error type for all diary generation operations
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Baseline parameter validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Level passed to a label lookup was outside its enumerated range
    #[error("{field} level out of range [0, {max}]: {level}")]
    LevelOutOfRange {
        field: &'static str,
        max: i32,
        level: i32,
    },

    /// Artifact writing errors
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Baseline parameter validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Height must be strictly positive
    #[error("person's height must be positive: {value}")]
    NonPositiveHeight { value: f64 },

    /// Weight must be strictly positive
    #[error("person's weight must be positive: {value}")]
    NonPositiveWeight { value: f64 },

    /// Resting heart rate must be strictly positive
    #[error("person's heart beat rate must be positive: {value}")]
    NonPositiveHeartRate { value: i32 },

    /// Both blood pressure components must be strictly positive
    #[error("invalid blood pressure value: {upper}/{lower}")]
    InvalidBloodPressure { upper: i32, lower: i32 },

    /// Baseline appetite is a 0-2 scale
    #[error("person's average appetite level is out of bounds: {level}")]
    AppetiteOutOfRange { level: u8 },

    /// Diary date range must not be inverted
    #[error("the start date {start} is past the end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Result type alias for diaryrs operations
pub type Result<T> = std::result::Result<T, DiaryError>;
